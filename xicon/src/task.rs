use console::style;
use std::fmt::Display;
use std::time::Instant;

pub struct TaskRunner {
    num_tasks: u32,
    current_task: u32,
    now: Instant,
    descr: String,
    verbose: bool,
}

impl TaskRunner {
    pub fn new(num_tasks: u32, verbose: bool) -> Self {
        Self {
            num_tasks,
            current_task: 0,
            now: Instant::now(),
            descr: "".into(),
            verbose,
        }
    }

    fn task_id(&self) -> String {
        style(format!("[{}/{}]", self.current_task + 1, self.num_tasks)).to_string()
    }

    pub fn start_task(&mut self, descr: impl Into<String>) {
        self.now = Instant::now();
        self.descr = descr.into();
        tracing::debug!(task = %self.descr, "start");
        if self.verbose {
            println!("{} {}", self.task_id(), &self.descr);
        }
    }

    pub fn end_task(&mut self) {
        let time = self.now.elapsed();
        println!(
            "{} {} Created {} [{}ms]",
            self.task_id(),
            style("[OK]").green(),
            &self.descr,
            time.as_millis()
        );
        self.current_task += 1;
    }

    pub fn finished(&self) -> u32 {
        self.current_task
    }
}

pub fn info(msg: impl Display) {
    println!("{}", msg);
}

pub fn ok(msg: impl Display) {
    println!("{} {}", style("[OK]").green(), msg);
}

pub fn error(msg: impl Display) {
    println!("{} {}", style("[ERROR]").red(), msg);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_finished_tasks() {
        let mut runner = TaskRunner::new(2, true);
        assert_eq!(runner.finished(), 0);
        runner.start_task("first");
        runner.end_task();
        runner.start_task("second");
        runner.end_task();
        assert_eq!(runner.finished(), 2);
    }

    #[test]
    fn plain_task_id_without_colors() {
        console::set_colors_enabled(false);
        let mut runner = TaskRunner::new(5, false);
        assert_eq!(runner.task_id(), "[1/5]");
        runner.start_task("mipmap-mdpi icon (48x48)");
        runner.end_task();
        assert_eq!(runner.task_id(), "[2/5]");
    }
}

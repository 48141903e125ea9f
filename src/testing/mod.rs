use crate::cmd::{Output, Runner};
use crate::prompt::Prompt;
use crate::workspace::Workspace;
use anyhow::Result;
use rand::{distributions::Alphanumeric, Rng};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::rc::Rc;

pub type Shared<T> = Rc<RefCell<T>>;

pub fn random_string(size: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(size)
        .map(char::from)
        .collect()
}

pub fn create_with_path(path: &Path, content: &str) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

/// A temporary home directory with a managed root inside it.
pub struct TestContext {
    pub temp_dir: PathBuf,
    pub home_dir: PathBuf,
    pub root_dir: PathBuf,
}

impl TestContext {
    pub fn new() -> Self {
        let temp_dir = std::env::temp_dir().join(format!("dotties-{}", random_string(10)));
        let home_dir = temp_dir.join("home");
        let root_dir = home_dir.join(".dots");
        fs::create_dir_all(&home_dir).expect("failed to create temporary home");

        Self {
            temp_dir,
            home_dir,
            root_dir,
        }
    }

    /// Creates the managed root, as `init` would.
    pub fn with_root(self) -> Self {
        fs::create_dir_all(&self.root_dir).expect("failed to create managed root");
        self
    }

    pub fn workspace(&self) -> Workspace {
        Workspace::new(self.home_dir.clone(), self.root_dir.clone())
    }

    pub fn home_path(&self, path: &str) -> PathBuf {
        self.home_dir.join(path)
    }

    pub fn root_path(&self, path: &str) -> PathBuf {
        self.root_dir.join(path)
    }

    pub fn create_home_file(&self, path: &str) -> PathBuf {
        let p = self.home_path(path);
        create_with_path(&p, &random_string(10)).expect("failed to create file");
        p
    }

    pub fn create_root_file(&self, path: &str) -> PathBuf {
        let p = self.root_path(path);
        create_with_path(&p, &random_string(10)).expect("failed to create file");
        p
    }
}

impl Drop for TestContext {
    // Remove the tmp directory created for this fixture.
    fn drop(&mut self) {
        if self.temp_dir.exists() {
            fs::remove_dir_all(&self.temp_dir).expect("failed to remove temporary test directory");
        }
    }
}

/// Answers prompts from a script, in order, and records the questions asked.
pub struct PromptMock {
    answers: RefCell<VecDeque<String>>,
    pub asked: Shared<Vec<String>>,
}

impl PromptMock {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().map(|s| s.to_string()).collect()),
            asked: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl Prompt for PromptMock {
    fn prompt(&self, msg: &str) -> Result<String> {
        self.asked.borrow_mut().push(msg.to_string());
        match self.answers.borrow_mut().pop_front() {
            Some(answer) => Ok(answer),
            None => anyhow::bail!("unexpected prompt: {msg}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Call {
    pub cwd: PathBuf,
    pub program: String,
    pub args: Vec<String>,
}

impl Call {
    pub fn line(&self) -> String {
        format!("{} {}", self.program, self.args.join(" "))
    }
}

pub type Effect = dyn Fn(&Call);

/// Records every command instead of running it.
pub struct RunnerMock {
    pub calls: Shared<Vec<Call>>,
    failing: Option<String>,
    effect: Option<Box<Effect>>,
}

impl RunnerMock {
    pub fn new() -> Self {
        Self {
            calls: Rc::new(RefCell::new(Vec::new())),
            failing: None,
            effect: None,
        }
    }

    /// Makes every invocation of `program` report failure.
    pub fn failing(mut self, program: &str) -> Self {
        self.failing = Some(program.to_string());
        self
    }

    /// Runs `effect` for every recorded call, e.g. to emulate a clone.
    pub fn with_effect(mut self, effect: Box<Effect>) -> Self {
        self.effect = Some(effect);
        self
    }

    fn record(&self, cwd: &Path, program: &str, args: &[String]) -> bool {
        let call = Call {
            cwd: cwd.to_path_buf(),
            program: program.to_string(),
            args: args.to_vec(),
        };
        if let Some(effect) = &self.effect {
            effect(&call);
        }
        self.calls.borrow_mut().push(call);
        self.failing.as_deref() != Some(program)
    }
}

impl Runner for RunnerMock {
    fn capture(&self, cwd: &Path, program: &str, args: &[String]) -> Result<Output> {
        let success = self.record(cwd, program, args);
        let output = if success {
            Output {
                stdout: format!("{program} ok\n"),
                stderr: String::new(),
                success,
            }
        } else {
            Output {
                stdout: String::new(),
                stderr: format!("{program}: failed\n"),
                success,
            }
        };
        Ok(output)
    }

    fn run(&self, cwd: &Path, program: &str, args: &[String]) -> Result<bool> {
        Ok(self.record(cwd, program, args))
    }
}

#[test]
fn create_with_path_nested() {
    let context = TestContext::new();
    let path = context.home_path("newdir/new.rs");
    create_with_path(&path, "content").unwrap();
    assert!(path.exists());
}

#[test]
fn context_removed_on_drop() {
    let context = TestContext::new().with_root();
    let temp = context.temp_dir.clone();
    assert!(context.root_dir.is_dir());
    drop(context);
    assert!(!temp.exists());
}

use crate::handler::InitHandler;
use crate::path_str;
use crate::testing::{create_with_path, Call, PromptMock, RunnerMock, TestContext};

#[test]
fn init_fresh() {
    // Arrange
    let context = TestContext::new();
    let runner = RunnerMock::new();
    let calls = runner.calls.clone();
    let handler = InitHandler::new(
        Box::new(PromptMock::new(&["n"])),
        Box::new(runner),
        context.workspace(),
    );

    // Act
    handler.init().unwrap();

    // Assert
    assert!(context.root_dir.is_dir());
    let calls = calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].line(), "git init");
    assert_eq!(calls[0].cwd, context.root_dir);
}

#[test]
fn init_twice() {
    // Arrange
    let context = TestContext::new();
    let handler = InitHandler::new(
        Box::new(PromptMock::new(&["n"])),
        Box::new(RunnerMock::new()),
        context.workspace(),
    );
    handler.init().unwrap();
    let marker = context.create_root_file("vim/.vimrc");

    let runner = RunnerMock::new();
    let calls = runner.calls.clone();
    let prompt = PromptMock::new(&[]);
    let asked = prompt.asked.clone();
    let handler = InitHandler::new(Box::new(prompt), Box::new(runner), context.workspace());

    // Act
    let result = handler.init();

    // Assert
    assert!(result.is_ok());
    assert!(marker.is_file());
    assert!(calls.borrow().is_empty());
    assert!(asked.borrow().is_empty());
}

#[test]
fn init_fetch_without_url() {
    let context = TestContext::new();
    let runner = RunnerMock::new();
    let calls = runner.calls.clone();
    let handler = InitHandler::new(
        Box::new(PromptMock::new(&["y", ""])),
        Box::new(runner),
        context.workspace(),
    );

    handler.init().unwrap();

    assert!(context.root_dir.is_dir());
    assert_eq!(calls.borrow()[0].line(), "git init");
}

#[test]
fn init_clone() {
    // Arrange
    let context = TestContext::new();
    let root = context.root_dir.clone();
    let effect = move |call: &Call| {
        if call.args.first().map(String::as_str) == Some("clone") {
            create_with_path(&root.join("vim/.vimrc"), "set number").unwrap();
            create_with_path(&root.join("zsh/.zshrc"), "bindkey -v").unwrap();
            create_with_path(&root.join(".git/HEAD"), "ref: refs/heads/main").unwrap();
        }
    };
    let runner = RunnerMock::new().with_effect(Box::new(effect));
    let calls = runner.calls.clone();
    let url = "https://example.com/dots.git";
    let handler = InitHandler::new(
        Box::new(PromptMock::new(&["y", url])),
        Box::new(runner),
        context.workspace(),
    );

    // Act
    handler.init().unwrap();

    // Assert
    let calls = calls.borrow();
    assert_eq!(calls.len(), 2);
    assert_eq!(
        calls[0].line(),
        format!("git clone {} {}", url, path_str!(context.root_dir))
    );
    assert_eq!(calls[0].cwd, context.home_dir);
    assert_eq!(
        calls[1].line(),
        format!("stow -v -R -t {} vim zsh", path_str!(context.home_dir))
    );
    assert_eq!(calls[1].cwd, context.root_dir);
}

#[test]
fn init_clone_failure() {
    let context = TestContext::new();
    let runner = RunnerMock::new().failing("git");
    let calls = runner.calls.clone();
    let handler = InitHandler::new(
        Box::new(PromptMock::new(&["y", "https://example.com/missing.git"])),
        Box::new(runner),
        context.workspace(),
    );

    let result = handler.init();

    assert!(result.is_ok());
    assert_eq!(calls.borrow().len(), 1);
    assert!(!context.root_dir.exists());
}

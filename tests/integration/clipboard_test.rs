//! Clipboard export tests using mock tools.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use wcgen::clipboard::tool::{CopyTool, CopyToolError};
use wcgen::clipboard::{ClipboardError, Copy, CopyMethod, CopyResult, MAX_IMAGE_SIZE};
use wcgen::presenter::ResultPresenter;

use crate::helpers::artifact_for;

/// A mock tool recording how often it was asked to copy.
struct MockTool {
    method: CopyMethod,
    available: bool,
    result: Result<(), CopyToolError>,
    calls: Arc<AtomicUsize>,
    received: Arc<Mutex<Vec<u8>>>,
}

impl MockTool {
    fn new(method: CopyMethod) -> Self {
        Self {
            method,
            available: true,
            result: Ok(()),
            calls: Arc::new(AtomicUsize::new(0)),
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }

    fn failing(mut self, message: &str) -> Self {
        self.result = Err(CopyToolError::Failed(message.to_string()));
        self
    }

    fn missing(mut self) -> Self {
        self.result = Err(CopyToolError::NotFound);
        self
    }

    fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl CopyTool for MockTool {
    fn method(&self) -> CopyMethod {
        self.method
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn try_copy_image(&self, png: &[u8]) -> Result<(), CopyToolError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.received.lock().unwrap() = png.to_vec();
        self.result.clone()
    }
}

#[test]
fn default_name_comes_from_method() {
    assert_eq!(MockTool::new(CopyMethod::WlCopy).name(), "wl-copy");
}

#[test]
fn first_working_tool_wins() {
    let first = MockTool::new(CopyMethod::WlCopy);
    let second = MockTool::new(CopyMethod::Xclip);
    let second_calls = second.calls();
    let received = Arc::clone(&first.received);

    let copy = Copy::with_tools(vec![Box::new(first), Box::new(second)]);
    let result = copy.image(b"\x89PNG data").unwrap();

    assert_eq!(result, CopyResult::image_copied(CopyMethod::WlCopy, 9));
    assert_eq!(*received.lock().unwrap(), b"\x89PNG data");
    assert_eq!(second_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn unavailable_and_missing_tools_are_skipped() {
    let off = MockTool::new(CopyMethod::OsaScript).unavailable();
    let off_calls = off.calls();
    let missing = MockTool::new(CopyMethod::WlCopy).missing();
    let working = MockTool::new(CopyMethod::Xclip);

    let copy = Copy::with_tools(vec![Box::new(off), Box::new(missing), Box::new(working)]);
    let result = copy.image(b"png").unwrap();

    assert_eq!(result.tool(), CopyMethod::Xclip);
    assert_eq!(off_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn last_failure_is_reported() {
    let copy = Copy::with_tools(vec![
        Box::new(MockTool::new(CopyMethod::WlCopy).failing("no display")),
        Box::new(MockTool::new(CopyMethod::Xclip).failing("cannot open display")),
    ]);
    match copy.image(b"png") {
        Err(ClipboardError::AllToolsFailed(msg)) => assert_eq!(msg, "cannot open display"),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn no_tools_means_no_tool_available() {
    let copy = Copy::with_tools(vec![Box::new(MockTool::new(CopyMethod::Xclip).unavailable())]);
    assert!(matches!(
        copy.image(b"png"),
        Err(ClipboardError::NoToolAvailable)
    ));
}

#[test]
fn empty_and_oversized_images_are_refused_before_any_tool() {
    let tool = MockTool::new(CopyMethod::Xclip);
    let calls = tool.calls();
    let copy = Copy::with_tools(vec![Box::new(tool)]);

    assert!(matches!(copy.image(&[]), Err(ClipboardError::EmptyImage)));
    let huge = vec![0u8; MAX_IMAGE_SIZE as usize + 1];
    assert!(matches!(
        copy.image(&huge),
        Err(ClipboardError::ImageTooLarge { max_mb: 50, .. })
    ));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn presenter_copies_decoded_png() {
    let tool = MockTool::new(CopyMethod::Xclip);
    let received = Arc::clone(&tool.received);
    let copy = Copy::with_tools(vec![Box::new(tool)]);

    let presenter = ResultPresenter::new(Arc::new(artifact_for("clipboard export test")));
    let result = presenter.export_clipboard(&copy).unwrap();

    assert!(received.lock().unwrap().starts_with(b"\x89PNG"));
    assert!(result
        .message("word-cloud.png")
        .starts_with("Copied word-cloud.png to clipboard ("));
}

#[test]
fn undecodable_image_is_reported_as_invalid() {
    let mut artifact = artifact_for("clipboard export test");
    artifact.image_base64 = "not base64 at all!".into();
    let presenter = ResultPresenter::new(Arc::new(artifact));

    let tool = MockTool::new(CopyMethod::Xclip);
    let calls = tool.calls();
    let copy = Copy::with_tools(vec![Box::new(tool)]);
    match presenter.export_clipboard(&copy) {
        Err(err @ ClipboardError::InvalidImage(_)) => {
            assert!(err.to_string().contains("not valid base64"), "{err}");
        }
        other => panic!("unexpected: {other:?}"),
    }
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    // The artifact itself is untouched
    assert_eq!(presenter.artifact().image_base64, "not base64 at all!");
}

#[test]
fn missing_image_is_an_empty_clipboard_copy() {
    let mut artifact = artifact_for("clipboard export test");
    artifact.image_base64 = "   ".into();
    let presenter = ResultPresenter::new(Arc::new(artifact));

    let copy = Copy::with_tools(vec![Box::new(MockTool::new(CopyMethod::Xclip))]);
    assert!(matches!(
        presenter.export_clipboard(&copy),
        Err(ClipboardError::EmptyImage)
    ));
}

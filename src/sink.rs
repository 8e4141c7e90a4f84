use tracing::info;

/// Descriptor for an embedded frame. Frames are always full-size,
/// fullscreen-capable, and borderless; `restricted` asks the sink to embed
/// with scripts and same-origin only (no top navigation, no new windows).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameRequest {
    pub url: String,
    pub restricted: bool,
}

/// Where resolved content ends up. The page-side collaborators (window
/// opening, frame mounting, active-state bookkeeping) live behind this
/// seam; the decode pipeline never touches them directly.
pub trait RenderSink {
    /// Open content as a new top-level context and focus it.
    fn open_window(&mut self, url: &str);

    /// Mount an embedded frame for the resolved destination.
    fn embed(&mut self, frame: FrameRequest);

    /// Selection bookkeeping: clear any previous active marker, mark this
    /// module active, hide the placeholder control. Fired exactly once per
    /// successful resolution.
    fn mark_active(&mut self, module_key: &str);
}

/// Sink for the CLI: prints resolved destinations instead of rendering them.
pub struct StdoutSink;

impl RenderSink for StdoutSink {
    fn open_window(&mut self, url: &str) {
        println!("{url}");
    }

    fn embed(&mut self, frame: FrameRequest) {
        if frame.restricted {
            println!("{} [sandboxed]", frame.url);
        } else {
            println!("{}", frame.url);
        }
    }

    fn mark_active(&mut self, module_key: &str) {
        info!(module_key, "selection updated");
    }
}

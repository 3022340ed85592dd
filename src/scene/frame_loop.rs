/// Run/visibility gate of the scene render loop.
///
/// Frames only run while started and visible. Hidden frames are skipped,
/// never caught up on resume.
#[derive(Debug)]
pub struct FrameLoop {
    running: bool,
    visible: bool,
    frames: u64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            running: false,
            visible: true,
            frames: 0,
        }
    }

    pub fn start(&mut self) {
        self.running = true;
        self.frames = 0;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns true only on the hidden -> visible transition
    pub fn set_visible(&mut self, visible: bool) -> bool {
        let resumed = visible && !self.visible;
        self.visible = visible;
        resumed
    }

    pub fn should_run(&self) -> bool {
        self.running && self.visible
    }

    /// Count one frame if the loop is live. False when suspended.
    pub fn tick(&mut self) -> bool {
        if !self.should_run() {
            return false;
        }
        self.frames += 1;
        true
    }

    /// Frames run since the last `start`
    pub fn frame_count(&self) -> u64 {
        self.frames
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Request Queue
//=========================================================================
//
// Queue for scene transition and quit requests.
//
// Scenes queue requests here while handling input or updating. The frame
// runtime drains the queue at the frame boundary, after updates and
// before rendering, so a transition never swaps scenes mid-dispatch.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::SceneId;

//=== SceneRequest ========================================================

/// A deferred request from a scene to the frame runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneRequest {
    /// Replace the active scene with the named one.
    Switch(SceneId),

    /// Clear the run flag and end the main loop.
    Quit,
}

//=== RequestQueue ========================================================

/// FIFO queue of pending scene requests.
#[derive(Debug, Default)]
pub struct RequestQueue {
    queue: Vec<SceneRequest>,
}

impl RequestQueue {
    /// Creates a new empty queue.
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    /// Queues a request to be processed at the next frame boundary.
    pub fn push(&mut self, request: SceneRequest) {
        self.queue.push(request);
    }

    /// Returns true if no requests are pending.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Returns the number of pending requests.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Takes all pending requests, leaving the queue empty.
    pub fn take(&mut self) -> Vec<SceneRequest> {
        std::mem::take(&mut self.queue)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_are_taken_in_fifo_order() {
        let mut queue = RequestQueue::new();
        queue.push(SceneRequest::Switch(SceneId::Gameplay));
        queue.push(SceneRequest::Quit);

        assert_eq!(queue.len(), 2);

        let taken = queue.take();
        assert_eq!(
            taken,
            vec![SceneRequest::Switch(SceneId::Gameplay), SceneRequest::Quit]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn take_on_empty_queue_yields_nothing() {
        let mut queue = RequestQueue::new();
        assert!(queue.take().is_empty());
    }
}

use herald_primitives::InteractionId;
use tokio::sync::mpsc;

/// A request to acknowledge an interaction before its reply is ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeferRequest {
	/// Interaction to acknowledge.
	pub interaction: InteractionId,
	/// Whether the eventual reply is only visible to the invoker.
	pub ephemeral: bool,
}

/// Constructor for the sender/receiver pair between interactions and the transport.
pub struct AckQueue;

impl AckQueue {
	/// Creates an unbounded queue. The transport task owns the receiver.
	pub fn channel() -> (AckSender, AckReceiver) {
		let (tx, rx) = mpsc::unbounded_channel();
		(AckSender { tx }, AckReceiver { rx })
	}
}

/// Producer half; cheap to clone into every interaction handle.
#[derive(Debug, Clone)]
pub struct AckSender {
	tx: mpsc::UnboundedSender<DeferRequest>,
}

impl AckSender {
	/// Queues a request without waiting.
	///
	/// Returns false if the transport has shut down and the request was dropped.
	pub fn send(&self, request: DeferRequest) -> bool {
		self.tx.send(request).is_ok()
	}

	/// Returns true once the receiving transport is gone.
	pub fn is_closed(&self) -> bool {
		self.tx.is_closed()
	}
}

/// Consumer half drained by the network transport.
#[derive(Debug)]
pub struct AckReceiver {
	rx: mpsc::UnboundedReceiver<DeferRequest>,
}

impl AckReceiver {
	/// Waits for the next request. `None` once every sender is dropped.
	pub async fn recv(&mut self) -> Option<DeferRequest> {
		self.rx.recv().await
	}

	/// Takes a queued request without waiting.
	pub fn try_recv(&mut self) -> Option<DeferRequest> {
		self.rx.try_recv().ok()
	}

	/// Drains every request queued so far.
	pub fn drain(&mut self) -> Vec<DeferRequest> {
		std::iter::from_fn(|| self.try_recv()).collect()
	}
}

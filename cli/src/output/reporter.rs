//! Terminal implementation of the `Notifier` port.

use crate::application::ports::Notifier;
use crate::output::OutputContext;

/// Notifier that writes through the shared output context. Errors always
/// reach stderr, even under `--quiet`.
pub struct TerminalNotifier<'a> {
    ctx: &'a OutputContext,
}

impl<'a> TerminalNotifier<'a> {
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }
}

impl Notifier for TerminalNotifier<'_> {
    fn success(&self, message: &str) {
        self.ctx.success(message);
    }

    fn error(&self, message: &str) {
        self.ctx.error(message);
    }

    fn info(&self, message: &str) {
        self.ctx.info(message);
    }
}

//! Like controller
//!
//! Handles a click on a like star: resolve the message, read the user's
//! current likes, submit the like, then flip the star.
//!
//! The submission is awaited before the icon changes. The new state is the
//! toggle of the state implied by the likes read *before* the submission, and
//! the star is left untouched whenever either request fails.

use std::sync::Arc;

use starlike_core::{ClickEvent, DomainError, IconState, MessageId, NodeRef, UserLikes};
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, error, info, instrument, trace, warn};

use super::context::ControllerContext;

/// Result type for controller operations
pub type LikeResult<T> = Result<T, DomainError>;

/// What a single like click ended up doing
#[derive(Debug)]
pub enum ClickOutcome {
    /// The like was recorded and the star now shows `state`
    Toggled { message_id: MessageId, state: IconState },
    /// The click could not be tied to a message; nothing happened
    Ignored,
    /// A backend request failed; the star was left as it was
    Failed(DomainError),
}

impl ClickOutcome {
    pub fn is_toggled(&self) -> bool {
        matches!(self, Self::Toggled { .. })
    }
}

/// Like controller
pub struct LikeController {
    ctx: ControllerContext,
}

impl LikeController {
    /// Create a new LikeController
    pub fn new(ctx: ControllerContext) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &ControllerContext {
        &self.ctx
    }

    /// Message id of the container enclosing the click target
    ///
    /// `None` when there is no container or it carries no usable id.
    pub fn resolve_message_id(&self, event: &ClickEvent) -> Option<MessageId> {
        let selectors = self.ctx.selectors();
        let container = event.target().closest(&selectors.message_class)?;
        let raw = container.data(&selectors.id_key)?;
        MessageId::parse(&raw).ok()
    }

    /// Star icon the click should flip
    ///
    /// The target itself when it is the star, otherwise the star inside the
    /// like control enclosing the target.
    pub fn resolve_icon(&self, event: &ClickEvent) -> Option<NodeRef> {
        let selectors = self.ctx.selectors();
        let target = event.target();
        if selectors.icon_state_of(&**target).is_some() {
            return Some(Arc::clone(target));
        }
        let control = target.closest(&selectors.button_class)?;
        control
            .find(&selectors.filled_class)
            .or_else(|| control.find(&selectors.outline_class))
    }

    /// Whether the click landed on (or inside) a like control
    pub fn is_like_control(&self, event: &ClickEvent) -> bool {
        event
            .target()
            .closest(&self.ctx.selectors().button_class)
            .is_some()
    }

    /// Fetch the session user's liked message ids, fresh every time
    #[instrument(skip_all)]
    pub async fn fetch_user_likes(&self) -> LikeResult<UserLikes> {
        self.ctx.backend().fetch_user_likes().await
    }

    /// Record a like for `message_id`
    #[instrument(skip_all, fields(message_id = %message_id))]
    pub async fn submit_like(&self, message_id: &MessageId) -> LikeResult<()> {
        self.ctx.backend().submit_like(message_id).await
    }

    /// Run the full like interaction for one click
    ///
    /// Returns the state the star was moved to.
    #[instrument(skip_all)]
    pub async fn handle_click(&self, event: &ClickEvent) -> LikeResult<IconState> {
        self.toggle(event).await.map(|(_, state)| state)
    }

    /// Handle a click without propagating failures
    ///
    /// Missing targets are dropped silently; backend failures are logged as
    /// warnings.
    #[instrument(skip_all)]
    pub async fn on_click(&self, event: &ClickEvent) -> ClickOutcome {
        match self.toggle(event).await {
            Ok((message_id, state)) => ClickOutcome::Toggled { message_id, state },
            Err(e) if e.is_missing_target() => {
                debug!("Click without a message star ignored");
                ClickOutcome::Ignored
            }
            Err(e) => {
                warn!(error = %e, code = e.code(), "Like request failed");
                ClickOutcome::Failed(e)
            }
        }
    }

    async fn toggle(&self, event: &ClickEvent) -> LikeResult<(MessageId, IconState)> {
        event.prevent_default();

        let message_id = self
            .resolve_message_id(event)
            .ok_or(DomainError::MissingTarget)?;
        let icon = self.resolve_icon(event).ok_or(DomainError::MissingTarget)?;

        let likes = self.fetch_user_likes().await?;
        let prior = IconState::from_membership(likes.contains(&message_id));

        self.submit_like(&message_id).await?;

        let next = prior.toggled();
        self.update_icon(&icon, next);

        info!(
            message_id = %message_id,
            liked = next.is_liked(),
            "Like toggled"
        );

        Ok((message_id, next))
    }

    /// Delegated click loop
    ///
    /// Clicks that do not land on a like control are skipped. Each like click
    /// runs on its own task, so rapid clicks overlap. Once the click stream
    /// closes, waits for in-flight handlers and returns every outcome.
    pub async fn listen(
        self: Arc<Self>,
        mut clicks: mpsc::UnboundedReceiver<Arc<ClickEvent>>,
    ) -> Vec<ClickOutcome> {
        let mut tasks = JoinSet::new();
        let mut outcomes = Vec::new();

        while let Some(event) = clicks.recv().await {
            if !self.is_like_control(&event) {
                trace!("Click outside a like control");
                continue;
            }

            let controller = Arc::clone(&self);
            tasks.spawn(async move { controller.on_click(&event).await });

            while let Some(joined) = tasks.try_join_next() {
                collect(joined, &mut outcomes);
            }
        }

        while let Some(joined) = tasks.join_next().await {
            collect(joined, &mut outcomes);
        }

        debug!(handled = outcomes.len(), "Click stream closed");

        outcomes
    }

    fn update_icon(&self, icon: &NodeRef, state: IconState) {
        let selectors = self.ctx.selectors();
        icon.remove_class(selectors.icon_class(state.toggled()));
        icon.add_class(selectors.icon_class(state));
    }
}

fn collect(joined: Result<ClickOutcome, tokio::task::JoinError>, outcomes: &mut Vec<ClickOutcome>) {
    match joined {
        Ok(outcome) => outcomes.push(outcome),
        Err(e) => error!(error = %e, "Click handler task failed"),
    }
}

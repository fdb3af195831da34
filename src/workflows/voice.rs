use serde_json::json;
use tracing::{debug, info, warn};

use super::Desk;
use crate::analysis::{Actor, VoiceClip};
use crate::formatter::AWAITING_ANALYSIS;
use crate::services::api::{Transport, ENDPOINT_SYNTHESIZE_VOICE};
use crate::session::SessionHandle;

impl<T: Transport> Desk<T> {
    /// Speaks the actor's last public response. Returns `None` without calling the
    /// engine when there is nothing to speak, and `None` on any engine failure.
    /// Failures are only logged; this is an optional extra on the page.
    pub async fn synthesize_voice(&self, session: &SessionHandle, actor: Actor) -> Option<VoiceClip> {
        let Some(analysis) = session.get(actor) else {
            debug!("No session analysis for {}, skipping voice", actor);
            return None;
        };
        let text = match analysis.public_response {
            Some(text) if text != AWAITING_ANALYSIS => text,
            _ => {
                debug!("No public response for {}, skipping voice", actor);
                return None;
            }
        };

        let payload = json!({ "text": text, "agent": actor.id() });
        match self
            .transport()
            .call_for_bytes(ENDPOINT_SYNTHESIZE_VOICE, &payload, self.timeouts.synthesis)
            .await
        {
            Ok(audio) if audio.is_empty() => {
                warn!("Voice synthesis for {} returned no audio", actor);
                None
            }
            Ok(audio) => {
                let clip = VoiceClip::new(actor, &text, audio);
                info!(bytes = clip.audio.len(), text_hash = clip.text_hash, "Voice synthesized for {}", actor);
                Some(clip)
            }
            Err(e) => {
                warn!("Voice synthesis error for {}: {}", actor, e);
                None
            }
        }
    }
}

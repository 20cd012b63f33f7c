use std::time::Duration;

use super::PAGE_HANDLE;

/// Delays of the mute settle-then-resume sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MuteTimings {
    /// Time every video is held muted before the new intent applies.
    pub settle: Duration,
    /// Time after the intent applies before playback is resumed.
    pub resume: Duration,
}

impl Default for MuteTimings {
    fn default() -> Self {
        Self {
            settle: Duration::from_millis(1500),
            resume: Duration::from_millis(1000),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MuteStepAction {
    /// Set the in-page flag to muted.
    ForceMute,
    /// Set the in-page flag to the requested intent.
    ApplyIntent(bool),
    /// Call `play()` on the last video in the document.
    ResumePlayback,
}

/// One step of a [`MuteSequence`], offset from the moment it was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MuteStep {
    pub at: Duration,
    pub action: MuteStepAction,
}

/// The three-step sequence run when a pane's mute intent changes.
///
/// Steps are strictly ordered: force-mute now, apply the intent after
/// `settle`, resume playback `resume` later. The whole sequence ships to the
/// page as one script so the renderer owns the timers; each step looks the
/// page state up again when it fires, so a navigation in between is
/// harmless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MuteSequence {
    steps: Vec<MuteStep>,
}

impl MuteSequence {
    pub fn new(muted: bool, timings: &MuteTimings) -> Self {
        let apply_at = timings.settle;
        let resume_at = timings.settle + timings.resume;
        Self {
            steps: vec![
                MuteStep {
                    at: Duration::ZERO,
                    action: MuteStepAction::ForceMute,
                },
                MuteStep {
                    at: apply_at,
                    action: MuteStepAction::ApplyIntent(muted),
                },
                MuteStep {
                    at: resume_at,
                    action: MuteStepAction::ResumePlayback,
                },
            ],
        }
    }

    pub fn steps(&self) -> &[MuteStep] {
        &self.steps
    }

    /// Render the sequence as a single script for `execute_script`.
    pub fn to_script(&self) -> String {
        let mut js = String::from("(function() {\n");
        for step in &self.steps {
            let body = match step.action {
                MuteStepAction::ForceMute => "page.muted = true;".to_string(),
                MuteStepAction::ApplyIntent(muted) => format!("page.muted = {muted};"),
                MuteStepAction::ResumePlayback => "page.resume();".to_string(),
            };
            let guarded = format!("var page = {PAGE_HANDLE}; if (page) {{ {body} }}");
            if step.at.is_zero() {
                js.push_str(&format!("    (function() {{ {guarded} }})();\n"));
            } else {
                js.push_str(&format!(
                    "    setTimeout(function() {{ {guarded} }}, {});\n",
                    step.at.as_millis()
                ));
            }
        }
        js.push_str("})();\n");
        js
    }
}

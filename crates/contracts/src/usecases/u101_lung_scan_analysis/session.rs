//! Upload session state machine.
//!
//! ```text
//! Idle --select--> FileSelected --submit--> Submitting --+--> Result
//!                                                        +--> Error
//! FileSelected | Result | Error --select--> FileSelected
//! FileSelected | Result | Error --clear---> Idle
//! ```
//!
//! The UI feeds [`SessionEvent`]s into [`UploadSession::dispatch`] and performs
//! whatever [`Dispatch`] asks for. Nothing here touches the DOM or the network.

use super::error::{PredictError, PreviewError, UploadError};
use super::preview::{PreviewHandle, PreviewSource, SelectedFile};

/// Наблюдаемое состояние виджета
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    FileSelected,
    Submitting,
    Result,
    Error,
}

/// Результат последней попытки: либо метка, либо ошибка, но не обе сразу
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    Empty,
    Label(String),
    Failed(UploadError),
}

#[derive(Debug)]
pub enum SessionEvent<F> {
    /// Picker reported a change; `None` when the user dismissed it
    FileSelected(Option<SelectedFile<F>>),
    SubmitRequested,
    PredictionResolved(Result<String, PredictError>),
    Cleared,
}

/// What the caller has to do after an event was processed
#[derive(Debug, PartialEq)]
pub enum Dispatch<F> {
    /// State changed (or stayed the same for a no-op); nothing else to do
    Applied,
    /// Event is not valid in the current phase and was dropped
    Ignored(Phase),
    /// Send exactly one request with this file, then report back with
    /// [`SessionEvent::PredictionResolved`]
    Predict(SelectedFile<F>),
}

struct Selection<F, H> {
    file: SelectedFile<F>,
    preview: H,
}

pub struct UploadSession<S: PreviewSource> {
    source: S,
    selection: Option<Selection<S::File, S::Handle>>,
    outcome: Outcome,
    is_submitting: bool,
}

impl<S: PreviewSource> UploadSession<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            selection: None,
            outcome: Outcome::Empty,
            is_submitting: false,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.is_submitting {
            return Phase::Submitting;
        }
        match (&self.outcome, &self.selection) {
            (Outcome::Label(_), _) => Phase::Result,
            (Outcome::Failed(_), _) => Phase::Error,
            (Outcome::Empty, Some(_)) => Phase::FileSelected,
            (Outcome::Empty, None) => Phase::Idle,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn has_file(&self) -> bool {
        self.selection.is_some()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.selection.as_ref().map(|s| s.file.name.as_str())
    }

    pub fn preview_src(&self) -> Option<&str> {
        self.selection.as_ref().map(|s| s.preview.src())
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn result_label(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Label(label) => Some(label),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<UploadError> {
        match self.outcome {
            Outcome::Failed(e) => Some(e),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<String> {
        self.error().map(|e| e.to_string())
    }

    /// Applies one event.
    ///
    /// Returns `Err` only when a preview handle could not be created; the
    /// session is then left idle with the previous handle already released.
    pub fn dispatch(
        &mut self,
        event: SessionEvent<S::File>,
    ) -> Result<Dispatch<S::File>, PreviewError> {
        match event {
            SessionEvent::FileSelected(file) => self.select_file(file),
            SessionEvent::SubmitRequested => Ok(self.submit()),
            SessionEvent::PredictionResolved(result) => Ok(self.resolve(result)),
            SessionEvent::Cleared => {
                if self.is_submitting {
                    return Ok(Dispatch::Ignored(Phase::Submitting));
                }
                self.teardown();
                Ok(Dispatch::Applied)
            }
        }
    }

    /// Releases the preview and resets every field, whatever the phase.
    /// Used on unmount, where an in-flight response has nowhere to land.
    pub fn teardown(&mut self) {
        // drop first: the handle is released here
        self.selection = None;
        self.outcome = Outcome::Empty;
        self.is_submitting = false;
    }

    fn select_file(
        &mut self,
        file: Option<SelectedFile<S::File>>,
    ) -> Result<Dispatch<S::File>, PreviewError> {
        let Some(file) = file else {
            return Ok(Dispatch::Applied);
        };
        if self.is_submitting {
            return Ok(Dispatch::Ignored(Phase::Submitting));
        }

        self.outcome = Outcome::Empty;
        // old handle goes before the new one is created
        self.selection = None;

        let preview = self.source.acquire(&file.content)?;
        self.selection = Some(Selection { file, preview });
        Ok(Dispatch::Applied)
    }

    fn submit(&mut self) -> Dispatch<S::File> {
        if self.is_submitting {
            return Dispatch::Ignored(Phase::Submitting);
        }
        let Some(selection) = &self.selection else {
            self.outcome = Outcome::Failed(UploadError::NoFileSelected);
            return Dispatch::Applied;
        };

        let file = selection.file.clone();
        self.is_submitting = true;
        self.outcome = Outcome::Empty;
        Dispatch::Predict(file)
    }

    fn resolve(&mut self, result: Result<String, PredictError>) -> Dispatch<S::File> {
        if !self.is_submitting {
            return Dispatch::Ignored(self.phase());
        }

        self.outcome = match result {
            Ok(label) => Outcome::Label(label),
            Err(e) => Outcome::Failed(UploadError::from(&e)),
        };
        self.is_submitting = false;
        Dispatch::Applied
    }
}

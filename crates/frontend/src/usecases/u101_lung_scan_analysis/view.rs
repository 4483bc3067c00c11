use super::api;
use super::preview::ObjectUrlSource;
use crate::shared::icons::icon;
use crate::shared::logger;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u101_lung_scan_analysis::{
    Dispatch, LungScanAnalysis, SelectedFile, SessionEvent, UploadSession, ACCEPTED_MIME,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement, MouseEvent};

type SessionSignal = RwSignal<UploadSession<ObjectUrlSource>, LocalStorage>;

/// Единая точка изменения сессии: все события виджета проходят здесь
fn dispatch(session: SessionSignal, event: SessionEvent<File>) {
    // None: the widget is gone and the session with it
    let Some(result) = session.try_update(|s| s.dispatch(event)) else {
        log::debug!("Upload session disposed, event dropped");
        return;
    };

    match result {
        Ok(Dispatch::Applied) => {
            log::debug!("Upload session -> {:?}", session.with_untracked(|s| s.phase()));
        }
        Ok(Dispatch::Ignored(phase)) => {
            log::warn!("Upload session ignored an event in phase {:?}", phase);
        }
        Ok(Dispatch::Predict(file)) => {
            log::info!("Submitting {} for analysis", file.name);
            spawn_local(async move {
                let result = api::predict(&file).await;
                match &result {
                    Ok(label) => log::info!("Prediction for {}: {}", file.name, label),
                    Err(e) => {
                        log::error!("Prediction for {} failed: {}", file.name, e);
                        logger::log_to_server(
                            &LungScanAnalysis::full_name(),
                            &format!("Prediction for {} failed: {}", file.name, e),
                        );
                    }
                }
                dispatch(session, SessionEvent::PredictionResolved(result));
            });
        }
        Err(e) => {
            log::error!("{}", e);
        }
    }
}

#[component]
pub fn ImageUpload() -> impl IntoView {
    let session: SessionSignal = RwSignal::new_local(UploadSession::new(ObjectUrlSource));

    // release the preview even if a request is still in flight
    on_cleanup(move || {
        session.try_update(|s| s.teardown());
    });

    let is_submitting = move || session.with(|s| s.is_submitting());
    let preview_src = move || session.with(|s| s.preview_src().map(str::to_string));
    let file_name = move || session.with(|s| s.file_name().map(str::to_string));
    let error_message = move || session.with(|s| s.error_message());
    let result_label = move || session.with(|s| s.result_label().map(str::to_string));

    let handle_file_change = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok());

        let file = input.and_then(|input| {
            let file = input.files().and_then(|files| files.get(0));
            // позволяет выбрать тот же файл повторно после очистки
            input.set_value("");
            file
        });

        let selected = file.map(|f| SelectedFile::new(f.name(), f));
        dispatch(session, SessionEvent::FileSelected(selected));
    };

    let handle_clear = move |_: MouseEvent| dispatch(session, SessionEvent::Cleared);
    let handle_submit = move |_: MouseEvent| dispatch(session, SessionEvent::SubmitRequested);

    view! {
        <div class="upload-card">
            <header class="upload-card__header">
                <h1 class="upload-card__title">"Federated X GLLE"</h1>
                <div class="upload-card__rule"></div>
                <h2 class="upload-card__subtitle">{LungScanAnalysis::display_name()}</h2>
            </header>

            <div class="upload-card__body">
                <div class="upload-area">
                    {move || match preview_src() {
                        None => view! {
                            <div class="upload-area__hint">
                                {icon("upload")}
                                <p>"Drag & drop or click to upload a lung image"</p>
                            </div>
                        }.into_any(),
                        Some(src) => view! {
                            <div class="upload-area__preview">
                                <button
                                    type="button"
                                    class="upload-area__clear"
                                    title="Clear"
                                    on:click=handle_clear
                                    disabled=is_submitting
                                >
                                    {icon("x")}
                                </button>
                                <img src=src alt="Lung scan preview" class="upload-area__image" />
                                <p class="upload-area__filename">{file_name}</p>
                            </div>
                        }.into_any(),
                    }}

                    <input
                        type="file"
                        accept=ACCEPTED_MIME
                        class="upload-area__input"
                        on:change=handle_file_change
                        disabled=is_submitting
                    />
                </div>

                {move || error_message().map(|e| view! {
                    <div class="warning-box warning-box--error">
                        {icon("alert-circle")}
                        <span class="warning-box__text">{e}</span>
                    </div>
                })}

                <Button
                    appearance=ButtonAppearance::Primary
                    class="upload-card__submit"
                    on_click=handle_submit
                    disabled=Signal::derive(move || session.with(|s| s.is_submitting() || !s.has_file()))
                >
                    {move || if is_submitting() {
                        view! {
                            <span class="upload-card__busy">
                                {icon("loader")}
                                " Analyzing..."
                            </span>
                        }.into_any()
                    } else {
                        view! { "Analyze Image" }.into_any()
                    }}
                </Button>
            </div>

            {move || result_label()
                .filter(|_| !is_submitting())
                .map(|label| view! {
                    <div class="result-card">
                        <div class="result-card__title">
                            {icon("check-circle")}
                            <h3>"Analysis Result"</h3>
                        </div>
                        <p class="result-card__label">{label}</p>
                    </div>
                })}

            <footer class="upload-card__footer">"Federated X GLLE - Minor 2 Project"</footer>
        </div>
    }
}

use std::rc::Rc;

use api::ApiClient;
use dioxus::prelude::*;

use crate::core::{
    format,
    notify::AlertNotifier,
    timing::{self, RESET_DELAY_MS},
};
use crate::t;

use super::{
    actions::{advance_or_notify, close_and_reset, take_record},
    form::{gender_label, GENDER_OPTIONS},
    likert::{step_questions, LikertVisual, QuestionId},
    session::SurveySession,
    state::use_survey_state,
    submit::submit,
    wizard::{step_title, ValidationError},
};

#[component]
pub fn SurveyView() -> Element {
    let client = use_context::<ApiClient>();
    let state = use_survey_state();
    let mut session = state.session;
    let modal = state.modal;
    let busy = state.busy;
    let mut class_input = use_signal(|| Option::<Rc<MountedData>>::None);

    let snapshot = session();
    let wizard = snapshot.wizard;
    let current = wizard.current();
    let total = wizard.total();
    let progress = format::format_percent(wizard.progress_percent());
    let mascot = snapshot.mascot();
    let form = snapshot.form;
    let name_locked = form.full_name_locked();
    let modal_state = modal();

    let on_next = move |_: MouseEvent| {
        let mut session = session;
        if advance_or_notify(&mut session, &AlertNotifier) != Some(ValidationError::MissingClassName) {
            return;
        }
        if let Some(input) = class_input() {
            spawn(async move {
                if let Err(err) = input.set_focus(true).await {
                    tracing::debug!(?err, "could not focus class name input");
                }
            });
        }
    };

    let on_prev = move |_: MouseEvent| {
        session.with_mut(|s| s.retreat());
    };

    let on_submit = move |_: MouseEvent| {
        let mut busy = busy;
        let Some(record) = busy.with_mut(|b| take_record(b, &session.read(), &AlertNotifier)) else {
            return;
        };
        let client = client.clone();
        state.spawn(async move {
            let mut view = modal;
            submit(&client, &AlertNotifier, &mut view, record).await;
            busy.set(false);
        });
    };

    let close_feedback = move || {
        state.spawn(async move {
            let mut view = modal;
            let mut session = session;
            close_and_reset(&mut view, &mut session, timing::sleep_ms(RESET_DELAY_MS)).await;
        });
    };

    rsx! {
        article { class: "survey",
            div { class: "survey__header",
                // Re-keyed on every step so the bounce animation replays.
                for (step, glyph) in [(current, mascot)] {
                    span {
                        key: "{step}-{glyph}",
                        id: "penguin-mascot",
                        class: "mascot mascot--bounce",
                        aria_hidden: "true",
                        "{glyph}"
                    }
                }
                div { class: "progress-bar",
                    div { class: "progress-bar-fill", style: "width: {progress}" }
                }
                span { class: "survey__step-count",
                    {t!("survey-step-count", current = (current + 1), total = total)}
                }
            }

            form {
                id: "emotionForm",
                class: "survey__form",
                onsubmit: move |evt| evt.prevent_default(),

                for step in 0..total {
                    section {
                        key: "{step}",
                        class: if step == current { "survey-step active-step" } else { "survey-step" },
                        h2 { class: "survey-step__title", {step_title(step)} }

                        if step == 0 {
                            div { class: "survey-field",
                                label { r#for: "className", {t!("field-class-name")} }
                                input {
                                    id: "className",
                                    name: "className",
                                    r#type: "text",
                                    class: "survey-input",
                                    placeholder: t!("field-class-placeholder"),
                                    value: "{form.class_name}",
                                    onmounted: move |evt: MountedEvent| class_input.set(Some(evt.data())),
                                    oninput: move |evt: FormEvent| {
                                        session.with_mut(|s| s.form.class_name = evt.value());
                                    },
                                }
                            }
                            fieldset { class: "survey-field survey-choices",
                                legend { {t!("field-gender")} }
                                for option in GENDER_OPTIONS {
                                    label { key: "{option}", class: "survey-choice",
                                        input {
                                            r#type: "radio",
                                            name: "gender",
                                            value: option,
                                            checked: form.gender.as_deref() == Some(option),
                                            onchange: move |_| {
                                                session.with_mut(|s| s.form.gender = Some(option.to_string()));
                                            },
                                        }
                                        span { {gender_label(option)} }
                                    }
                                }
                            }
                            div { class: "survey-field",
                                label { r#for: "fullName", {t!("field-full-name")} }
                                input {
                                    id: "fullName",
                                    name: "fullName",
                                    r#type: "text",
                                    class: if name_locked { "survey-input survey-input--locked" } else { "survey-input" },
                                    disabled: name_locked,
                                    value: "{form.full_name()}",
                                    oninput: move |evt: FormEvent| {
                                        session.with_mut(|s| s.form.set_full_name(evt.value()));
                                    },
                                }
                            }
                            label { class: "survey-choice survey-choice--anonymous",
                                input {
                                    id: "anonymous",
                                    name: "anonymous",
                                    r#type: "checkbox",
                                    checked: form.is_anonymous(),
                                    onchange: move |_| {
                                        session.with_mut(|s| {
                                            let flag = !s.form.is_anonymous();
                                            s.form.set_anonymous(flag);
                                        });
                                    },
                                }
                                span { {t!("field-anonymous")} }
                            }
                        }

                        for number in step_questions(step).iter().copied() {
                            if let Some(question) = QuestionId::new(number) {
                                {likert_item(question, form.rating_raw(question).to_string(), session)}
                            }
                        }

                        if step + 1 == total {
                            div { class: "survey-field",
                                label { r#for: "openEnded", {t!("field-open-ended")} }
                                textarea {
                                    id: "openEnded",
                                    name: "openEnded",
                                    class: "survey-input survey-textarea",
                                    rows: "5",
                                    placeholder: t!("field-open-ended-placeholder"),
                                    value: "{form.open_ended}",
                                    oninput: move |evt: FormEvent| {
                                        session.with_mut(|s| s.form.open_ended = evt.value());
                                    },
                                }
                            }
                        }

                        div { class: "survey-step__nav",
                            if step > 0 {
                                button {
                                    r#type: "button",
                                    class: "button button--ghost btn-prev",
                                    onclick: on_prev,
                                    {t!("button-prev")}
                                }
                            }
                            if step + 1 < total {
                                button {
                                    r#type: "button",
                                    class: "button button--primary btn-next",
                                    onclick: on_next,
                                    {t!("button-next")}
                                }
                            } else {
                                button {
                                    r#type: "button",
                                    class: "button button--accent btn-submit",
                                    disabled: busy(),
                                    onclick: on_submit.clone(),
                                    {t!("button-submit")}
                                }
                            }
                        }
                    }
                }
            }

            if modal_state.loading {
                div { id: "loading-modal", class: "modal modal--loading",
                    div { class: "modal__content",
                        div { class: "modal__spinner", aria_hidden: "true" }
                        p { {t!("loading-message")} }
                    }
                }
            }

            if let Some(text) = modal_state.feedback {
                div {
                    id: "feedback-modal",
                    class: "modal modal--feedback",
                    onclick: move |_| close_feedback(),
                    div {
                        class: "modal__content",
                        onclick: move |evt| evt.stop_propagation(),
                        h3 { {t!("feedback-title")} }
                        p { id: "feedback-text", class: "modal__text", "{text}" }
                        button {
                            id: "close-feedback-btn",
                            r#type: "button",
                            class: "button button--primary",
                            onclick: move |_| close_feedback(),
                            {t!("button-close")}
                        }
                    }
                }
            }
        }
    }
}

fn likert_item(question: QuestionId, raw: String, mut session: Signal<SurveySession>) -> Element {
    let visual = LikertVisual::sync(&raw);
    let field = question.field();
    let prompt = question.prompt();

    rsx! {
        div { key: "{field}", class: "likert-item",
            label { r#for: "{field}", class: "likert-item__prompt", "{prompt}" }
            div { class: "likert-icons",
                for (value, glyph, active) in visual.icons() {
                    span {
                        key: "{value}",
                        class: if active { "likert-icon active" } else { "likert-icon" },
                        "data-value": "{value}",
                        "{glyph}"
                    }
                }
            }
            input {
                id: "{field}",
                name: "{field}",
                r#type: "range",
                class: "likert-slider",
                min: "1",
                max: "5",
                step: "1",
                value: "{raw}",
                oninput: move |evt: FormEvent| {
                    session.with_mut(|s| s.form.set_rating(question, evt.value()));
                },
            }
        }
    }
}

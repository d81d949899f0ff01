use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_hooks::use_is_mounted;

use crate::components::countdown_clock::CountdownClock;
use crate::config;
use crate::registration::fields::{NAME_PATTERN, PHONE_MAX_LEN, PHONE_MIN_LEN, PHONE_PATTERN};
use crate::registration::{
    begin_submission, complete_submission, FieldName, FormIntakeTransport, RegistrationFields,
    SubmissionSink, SubmissionState, SubmitError,
};

pub enum FieldAction {
    Set(FieldName, String),
    Clear,
}

impl Reducible for RegistrationFields {
    type Action = FieldAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            FieldAction::Set(field, value) => Rc::new((*self).clone().with(field, value)),
            FieldAction::Clear => Rc::new(RegistrationFields::default()),
        }
    }
}

/// Writes submission progress back into the card's hooks, as long as the
/// card is still mounted. `latest` is updated immediately so handlers that
/// run before the next render see the real state.
#[derive(Clone)]
struct CardSink {
    latest: Rc<RefCell<SubmissionState>>,
    state: UseStateHandle<SubmissionState>,
    fields: UseReducerDispatcher<RegistrationFields>,
    is_mounted: Rc<dyn Fn() -> bool>,
}

impl SubmissionSink for CardSink {
    fn is_live(&self) -> bool {
        (self.is_mounted)()
    }

    fn set_state(&self, state: SubmissionState) {
        *self.latest.borrow_mut() = state.clone();
        self.state.set(state);
    }

    fn clear_fields(&self) {
        self.fields.dispatch(FieldAction::Clear);
    }
}

fn field_input(fields: &UseReducerHandle<RegistrationFields>, field: FieldName) -> Callback<InputEvent> {
    let fields = fields.dispatcher();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        fields.dispatch(FieldAction::Set(field, input.value()));
    })
}

#[derive(Properties, PartialEq)]
pub struct RegistrationCardProps {
    /// Handle the sticky bar uses to scroll here.
    pub form_ref: NodeRef,
}

#[function_component(RegistrationCard)]
pub fn registration_card(props: &RegistrationCardProps) -> Html {
    let state = use_state(SubmissionState::default);
    let latest = use_mut_ref(SubmissionState::default);
    let notice = use_state(|| None::<&'static str>);
    let fields = use_reducer(RegistrationFields::default);
    let transport = use_memo(|_| FormIntakeTransport::default(), ());
    let is_mounted = use_is_mounted();

    let onsubmit = {
        let sink = CardSink {
            latest,
            state: state.clone(),
            fields: fields.dispatcher(),
            is_mounted,
        };
        let notice = notice.clone();
        let fields = fields.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let current = sink.latest.borrow().clone();
            let snapshot = (*fields).clone();
            match begin_submission(&sink, &current, &snapshot) {
                Ok(()) => {
                    notice.set(None);
                    let sink = sink.clone();
                    let transport = transport.clone();
                    spawn_local(async move {
                        complete_submission(&*transport, &sink, &snapshot).await;
                    });
                }
                Err(SubmitError::Invalid(e)) => notice.set(Some(e.user_message())),
                Err(e) => debug!("Registration not submitted: {}", e),
            }
        })
    };

    let is_submitting = state.is_submitting();

    html! {
        <div class="form-card">
            <style>
                {r#"
                .form-card {
                    background: rgba(24, 24, 27, 0.9);
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 24px;
                    padding: 2rem;
                    box-shadow: 0 16px 48px rgba(0, 0, 0, 0.4);
                }
                .timer-container {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 8px;
                    background: rgba(239, 68, 68, 0.1);
                    border: 1px solid rgba(239, 68, 68, 0.3);
                    border-radius: 12px;
                    padding: 0.6rem 1rem;
                    margin-bottom: 1.5rem;
                    color: #fca5a5;
                    font-size: 0.9rem;
                }
                .timer {
                    font-family: monospace;
                    font-weight: 700;
                    font-size: 1.1rem;
                    color: #ef4444;
                }
                .form-title {
                    color: white;
                    font-size: 1.3rem;
                    margin-bottom: 1rem;
                }
                .benefits-list {
                    display: flex;
                    flex-direction: column;
                    gap: 6px;
                    margin-bottom: 1rem;
                }
                .benefit-item {
                    color: #d4d4d8;
                    font-size: 0.9rem;
                }
                .check-icon {
                    color: #10b981;
                    margin-right: 6px;
                }
                .seats {
                    display: block;
                    color: #f59e0b;
                    font-size: 0.8rem;
                    text-transform: uppercase;
                    margin-bottom: 1rem;
                }
                .input-group {
                    display: flex;
                    flex-direction: column;
                    gap: 12px;
                }
                .input-wrapper {
                    display: flex;
                    align-items: center;
                    background: rgba(0, 0, 0, 0.4);
                    border: 1px solid #333;
                    border-radius: 12px;
                    padding: 0 12px;
                }
                .input-wrapper:focus-within {
                    border-color: #7c3aed;
                }
                .input-icon {
                    color: #71717a;
                    margin-right: 8px;
                }
                .phone-prefix {
                    color: #a1a1aa;
                    margin-left: 4px;
                }
                .prefix-divider {
                    width: 1px;
                    height: 20px;
                    background: #333;
                    margin: 0 8px;
                }
                .registration-input {
                    flex: 1;
                    background: transparent;
                    border: none;
                    outline: none;
                    color: white;
                    padding: 14px 0;
                    font-size: 1rem;
                }
                .submit-button {
                    background: linear-gradient(45deg, #7c3aed, #db2777);
                    color: white;
                    border: none;
                    border-radius: 12px;
                    padding: 16px;
                    font-size: 1.05rem;
                    font-weight: 700;
                    cursor: pointer;
                    transition: transform 0.2s;
                }
                .submit-button:hover:not(:disabled) {
                    transform: translateY(-2px);
                }
                .submit-button:disabled {
                    opacity: 0.6;
                    cursor: not-allowed;
                }
                .submit-error {
                    color: #ef4444;
                    font-size: 0.8rem;
                    margin-top: 0.5rem;
                }
                .success-panel {
                    text-align: center;
                    padding: 2rem 0;
                }
                .success-badge {
                    width: 60px;
                    height: 60px;
                    background-color: rgba(16, 185, 129, 0.2);
                    color: #10b981;
                    font-size: 2rem;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin: 0 auto 1rem;
                }
                .success-panel h3 {
                    color: white;
                    margin-bottom: 0.5rem;
                }
                .success-panel p {
                    color: #a1a1aa;
                    font-size: 0.9rem;
                }
                .secure-text {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 6px;
                    margin-top: 1.5rem;
                    color: #71717a;
                    font-size: 0.8rem;
                }
                "#}
            </style>
            <CountdownClock />
            {
                if state.is_success() {
                    html! {
                        <div class="success-panel">
                            <div class="success-badge">{"✓"}</div>
                            <h3>{"Registrazione completata!"}</h3>
                            <p>{"Ti abbiamo inviato una mail con il link di accesso."}</p>
                        </div>
                    }
                } else {
                    html! {
                        <>
                            <h3 class="form-title">
                                {"Inserisci i tuoi dati per "}
                                <span class="highlight">{"partecipare al webinar"}</span>
                            </h3>
                            <div class="benefits-list">
                                <div class="benefit-item"><span class="check-icon">{"✓"}</span>{"Nessuna esperienza richiesta"}</div>
                                <div class="benefit-item"><span class="check-icon">{"✓"}</span>{"100% Semi-automatico"}</div>
                                <div class="benefit-item"><span class="check-icon">{"✓"}</span>{"Setup in 24 ore"}</div>
                            </div>
                            <span class="seats">{"ultimi 3 posti disponibili"}</span>
                            <form ref={props.form_ref.clone()} class="input-group" onsubmit={onsubmit}>
                                <div class="input-wrapper">
                                    <span class="input-icon">{"👤"}</span>
                                    <input
                                        required={true}
                                        name="name"
                                        type="text"
                                        pattern={NAME_PATTERN}
                                        placeholder="Nome e cognome"
                                        class="registration-input"
                                        value={fields.name.clone()}
                                        oninput={field_input(&fields, FieldName::Name)}
                                    />
                                </div>
                                <div class="input-wrapper">
                                    <span class="input-icon">{"✉"}</span>
                                    <input
                                        required={true}
                                        name="email"
                                        type="email"
                                        placeholder="La tua email migliore"
                                        class="registration-input"
                                        value={fields.email.clone()}
                                        oninput={field_input(&fields, FieldName::Email)}
                                    />
                                </div>
                                <div class="input-wrapper">
                                    <span class="flag-icon">{"🇮🇹"}</span>
                                    <span class="phone-prefix">{config::PHONE_PREFIX}</span>
                                    <div class="prefix-divider"></div>
                                    <input
                                        required={true}
                                        name="phone"
                                        type="tel"
                                        pattern={PHONE_PATTERN}
                                        minlength={PHONE_MIN_LEN.to_string()}
                                        maxlength={PHONE_MAX_LEN.to_string()}
                                        placeholder="Il tuo numero di telefono"
                                        class="registration-input"
                                        value={fields.phone.clone()}
                                        oninput={field_input(&fields, FieldName::Phone)}
                                    />
                                </div>
                                <button type="submit" class="submit-button" disabled={is_submitting}>
                                    { if is_submitting { "Attendere..." } else { "Sblocca il Metodo Ora" } }
                                </button>
                                {
                                    if let Some(message) = (*notice).or(state.error_message()) {
                                        html! { <p class="submit-error">{message}</p> }
                                    } else {
                                        html! {}
                                    }
                                }
                            </form>
                        </>
                    }
                }
            }
            <div class="secure-text">
                <span>{"🔒 Dati protetti"}</span>
                <span>{"✉️ Riceverai tutti i dettagli tramite mail"}</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn typed(actions: Vec<FieldAction>) -> Rc<RegistrationFields> {
        actions
            .into_iter()
            .fold(Rc::new(RegistrationFields::default()), |fields, action| fields.reduce(action))
    }

    #[test]
    fn typing_updates_controlled_fields() {
        let fields = typed(vec![
            FieldAction::Set(FieldName::Name, "Mario Rossi".to_string()),
            FieldAction::Set(FieldName::Phone, "1234567890".to_string()),
        ]);
        assert_eq!(fields.name, "Mario Rossi");
        assert_eq!(fields.phone, "1234567890");
        assert_eq!(fields.email, "");
    }

    #[test]
    fn clear_resets_every_field() {
        let fields = typed(vec![
            FieldAction::Set(FieldName::Name, "Mario Rossi".to_string()),
            FieldAction::Set(FieldName::Email, "mario@example.it".to_string()),
            FieldAction::Clear,
        ]);
        assert_eq!(*fields, RegistrationFields::default());
    }
}

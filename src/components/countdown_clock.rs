use std::rc::Rc;

use log::info;
use yew::prelude::*;

use crate::countdown::{Countdown, CountdownTask};

pub enum CountdownAction {
    Tick,
}

impl Reducible for Countdown {
    type Action = CountdownAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CountdownAction::Tick => {
                if self.is_expired() {
                    return self;
                }
                let next = self.tick();
                if next.is_expired() {
                    info!("Registration countdown reached zero");
                }
                Rc::new(next)
            }
        }
    }
}

/// "Le iscrizioni chiudono tra: MM:SS". Restarts from 05:00 on every mount.
#[function_component(CountdownClock)]
pub fn countdown_clock() -> Html {
    let countdown = use_reducer(Countdown::new);

    {
        let dispatcher = countdown.dispatcher();
        use_effect_with_deps(
            move |_| {
                let task = CountdownTask::start(move || dispatcher.dispatch(CountdownAction::Tick));
                move || task.cancel()
            },
            (),
        );
    }

    html! {
        <div class="timer-container">
            <span>{"⏰"}</span>
            <span>{"Le iscrizioni chiudono tra:"}</span>
            <span class="timer">{countdown.to_string()}</span>
        </div>
    }
}

use common::feedback::TimerAction;
use common::model::FieldId;

#[derive(Clone)]
pub enum Msg {
    Input(FieldId, String),
    Submit,
    Timer(TimerAction),
    /// The simulated submission fired; carries the record captured at submit time.
    Submitted(String),
}

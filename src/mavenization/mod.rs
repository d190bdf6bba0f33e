/// Domain layer - bundle model, coordinate rules and the conversion walk
///
/// Everything in here is pure business logic; file and archive access goes
/// through the outbound ports.
pub mod domain;
pub mod services;

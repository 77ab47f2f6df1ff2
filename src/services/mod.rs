mod greeting;

pub use greeting::{
    build_greeting, send_birthday_wish, DispatchFailure, GreetingService, RunSummary,
};

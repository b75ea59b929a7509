pub const OK_REPLY: &'static str = "ok";

pub const HELLO_VIEW: &'static str = "response/hello";
pub const DATA_KEY: &'static str = "data";

pub const DEMO_USERNAME: &'static str = "userA";
pub const DEMO_AGE: i32 = 20;

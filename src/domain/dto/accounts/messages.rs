//! 클라이언트에 노출되는 응답 메시지

pub const MISSING_FIELDS: &str = "Please fill in all fields.";
pub const INVALID_PIN_FORMAT: &str = "PIN must be exactly 4 numbers.";

pub const ACCOUNT_EXISTS: &str = "Account with these partners already exists. Please sign in.";
pub const REGISTRATION_SUCCESS: &str = "Registration successful! You can now sign in.";
pub const REGISTRATION_FAILED: &str = "Registration failed";

pub const ACCOUNT_NOT_FOUND: &str = "No account found with these partner names. Please register.";
pub const LOGIN_SUCCESS: &str = "Login successful! Welcome to the house.";
pub const INVALID_PIN: &str = "Invalid PIN. Please try again.";
pub const LOGIN_FAILED: &str = "Login failed";

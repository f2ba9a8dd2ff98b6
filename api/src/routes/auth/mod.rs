//! OTP endpoints: issuing and verifying email verification codes

pub mod send_otp;
pub mod verify_otp;

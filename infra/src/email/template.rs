//! HTML template for the verification code email.

use vi_core::domain::entities::otp_code::OtpPurpose;

const OTP_EMAIL_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>VoiceInvoice Verification Code</title>
</head>
<body style="font-family: Arial, sans-serif; background-color: #f8fafc; margin: 0; padding: 0;">
    <div style="max-width: 600px; margin: 0 auto; background-color: white; border-radius: 8px; overflow: hidden; box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);">
        <div style="background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); padding: 40px 20px; text-align: center;">
            <h1 style="color: white; margin: 0; font-size: 28px;">VoiceInvoice</h1>
            <p style="color: rgba(255, 255, 255, 0.9); margin: 10px 0 0 0;">Voice to Invoice Conversion</p>
        </div>
        <div style="padding: 40px 20px;">
            <h2 style="color: #1f2937; margin: 0 0 20px 0;">Verification Code</h2>
            <p style="color: #6b7280; margin: 0 0 30px 0;">
                Your verification code to {{purpose}} VoiceInvoice is:
            </p>
            <div style="background-color: #f3f4f6; border-radius: 8px; padding: 20px; text-align: center; margin: 30px 0;">
                <div style="font-size: 36px; font-weight: bold; color: #667eea; letter-spacing: 8px;">
                    {{code}}
                </div>
            </div>
            <p style="color: #ef4444; margin: 20px 0; font-size: 14px;">
                This code will expire in {{minutes}} minutes.
            </p>
            <p style="color: #6b7280; margin: 20px 0; font-size: 14px;">
                If you didn't request this code, please ignore this email.
            </p>
        </div>
        <div style="background-color: #f8fafc; padding: 20px; text-align: center; border-top: 1px solid #e5e7eb;">
            <p style="color: #9ca3af; margin: 0; font-size: 12px;">
                &copy; 2025 VoiceInvoice. All rights reserved.
            </p>
        </div>
    </div>
</body>
</html>
"#;

/// Subject line for a verification code email
pub fn otp_subject(code: &str) -> String {
    format!("Your VoiceInvoice Verification Code - {}", code)
}

/// Render the HTML body of a verification code email
pub fn otp_html_body(code: &str, purpose: OtpPurpose, expiry_minutes: i64) -> String {
    OTP_EMAIL_HTML
        .replace("{{code}}", code)
        .replace("{{purpose}}", purpose.as_str())
        .replace("{{minutes}}", &expiry_minutes.to_string())
}

/// Plain-text fallback body for clients that do not render HTML
pub fn otp_text_body(code: &str, purpose: OtpPurpose, expiry_minutes: i64) -> String {
    format!(
        "Your verification code to {} VoiceInvoice is: {}\n\n\
         This code will expire in {} minutes.\n\
         If you didn't request this code, please ignore this email.",
        purpose.as_str(),
        code,
        expiry_minutes
    )
}

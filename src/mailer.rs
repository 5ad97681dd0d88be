// SPDX-License-Identifier: Apache-2.0
use lettre::message::{Mailbox, Message, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, SmtpTransport, Transport};
use tracing::info;
use uuid::Uuid;

use crate::booking::BookingNotification;
use crate::config::MailConfig;
use crate::error::RelayError;

/// Domain used for the Message-ID when the from-address has no usable one.
const FALLBACK_MSGID_DOMAIN: &str = "sabarisastha.org";

/// Accent color of the HTML header bar (orange).
const HEADER_COLOR: &str = "#f97316";

/// Compose and transmit one booking confirmation.
///
/// Opens a fresh SMTPS session (implicit TLS, default certificate
/// verification), authenticates, sends, and drops the connection. Nothing is
/// pooled or retried; transport errors propagate to the caller unmodified.
///
/// Returns the generated Message-ID as the caller-facing correlation token.
pub fn send_booking_confirmation(
    config: &MailConfig,
    booking: &BookingNotification,
) -> Result<String, RelayError> {
    let (message, message_id) = compose(config, booking)?;

    let creds = Credentials::new(config.smtp_user.clone(), config.smtp_pass.clone());

    // Port 465 expects the connection to be TLS from the first byte, which
    // is what `relay` sets up (as opposed to STARTTLS on 587).
    let mailer = SmtpTransport::relay(&config.smtp_host)?
        .port(config.smtp_port)
        .credentials(creds)
        .build();

    mailer.send(&message)?;
    info!(
        message_id = %message_id,
        recipient = %booking.email,
        booking_id = %booking.booking_id,
        "booking confirmation sent"
    );

    Ok(message_id)
}

/// Build the two-part (text + HTML) confirmation message.
///
/// Split out from [`send_booking_confirmation`] so the rendered message can
/// be inspected without an SMTP server on hand.
pub fn compose(
    config: &MailConfig,
    booking: &BookingNotification,
) -> Result<(Message, String), RelayError> {
    let subject = format!(
        "Booking Confirmation - {} #{}",
        booking.booking_type, booking.booking_id
    );
    let message_id = generate_message_id(&config.from_email);

    let from = Mailbox::new(
        Some(config.from_name.clone()),
        config.from_email.parse::<Address>()?,
    );

    let mut builder = Message::builder()
        .from(from)
        .to(booking.email.parse::<Mailbox>()?)
        .subject(&subject)
        .message_id(Some(message_id.clone()));

    if let Some(bcc) = &config.bcc {
        builder = builder.bcc(bcc.parse::<Mailbox>()?);
    }

    let message = builder.multipart(MultiPart::alternative_plain_html(
        text_body(config, booking),
        html_body(config, booking),
    ))?;

    Ok((message, message_id))
}

/// `<{uuid}@{domain}>`, domain taken from the from-address so receiving
/// servers (Gmail in particular) accept the id as legitimate.
fn generate_message_id(from_email: &str) -> String {
    let domain = from_email
        .split_once('@')
        .map(|(_, domain)| domain.trim())
        .filter(|domain| !domain.is_empty())
        .unwrap_or(FALLBACK_MSGID_DOMAIN);
    format!("<{}@{}>", Uuid::new_v4(), domain)
}

fn text_body(config: &MailConfig, booking: &BookingNotification) -> String {
    format!(
        "Booking Confirmation - {booking_type} #{booking_id}\n\n\
         Dear {name},\n\n\
         Thank you for your {booking_type} booking at {from_name}.\n\n\
         Details:\n\
         - Date: {date}\n\
         - Slot: {slot}\n\
         - Booking ID: {booking_id}\n\n\
         May Lord Ayyappa bless you abundantly!\n\n\
         Regards,\n{from_name}\n",
        booking_type = booking.booking_type,
        booking_id = booking.booking_id,
        name = booking.name,
        date = booking.date,
        slot = booking.slot,
        from_name = config.from_name,
    )
}

fn html_body(config: &MailConfig, booking: &BookingNotification) -> String {
    // Unlike the text body, the greeting falls back to "Devotee" here.
    let greeting_name = if booking.name.is_empty() {
        "Devotee"
    } else {
        &booking.name
    };

    let detail_rows = [
        ("Booking Type", booking.booking_type.as_str()),
        ("Booking ID", booking.booking_id.as_str()),
        ("Name", booking.name.as_str()),
        ("Email", booking.email.as_str()),
        ("Date", booking.date.as_str()),
        ("Slot", booking.slot.as_str()),
    ];
    let table_rows: String = detail_rows
        .iter()
        .map(|(label, value)| {
            format!(
                "<tr><td style=\"padding:6px 8px;border:1px solid #e5e7eb;background:#fafafa;width:160px\"><strong>{label}</strong></td>\
                 <td style=\"padding:6px 8px;border:1px solid #e5e7eb\">{value}</td></tr>"
            )
        })
        .collect();

    format!(
        "<div style=\"font-family:system-ui,-apple-system,Segoe UI,Roboto,Arial,sans-serif;color:#0f172a;line-height:1.6\">\
           <div style=\"background:{HEADER_COLOR};color:white;padding:14px 16px;border-radius:10px 10px 0 0\">\
             <strong style=\"font-size:16px\">{from_name}</strong>\
           </div>\
           <div style=\"border:1px solid #e5e7eb;border-top:none;border-radius:0 0 10px 10px;padding:16px\">\
             <h2 style=\"margin:0 0 10px;font-size:18px\">Booking Confirmation - {booking_type} #{booking_id}</h2>\
             <p>Dear {greeting_name},</p>\
             <p>Thank you for your {booking_type} booking at {from_name}.</p>\
             <table style=\"border-collapse:collapse;width:100%;margin:10px 0 14px\"><tbody>{table_rows}</tbody></table>\
             <p>May Lord Ayyappa bless you abundantly!</p>\
             <p>Regards,<br/>{from_name}</p>\
           </div>\
         </div>",
        from_name = config.from_name,
        booking_type = booking.booking_type,
        booking_id = booking.booking_id,
    )
}

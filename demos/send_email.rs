use sevamail::booking::BookingNotification;
use sevamail::config::MailConfig;
use sevamail::mailer::send_booking_confirmation;

use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // SMTP settings come from the environment, same as the server
    dotenvy::dotenv().ok();
    let config = MailConfig::from_env()?;

    // Get recipient from command line argument
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <recipient_email>", args[0]);
        std::process::exit(1);
    }

    let booking = BookingNotification {
        name: "Test Devotee".into(),
        email: args[1].clone(),
        booking_type: "Pooja".into(),
        date: "2024-01-01".into(),
        slot: "Morning".into(),
        booking_id: "TEST-1".into(),
    };

    let message_id = send_booking_confirmation(&config, &booking)?;
    println!("Sent test confirmation to {} ({message_id})", booking.email);

    Ok(())
}

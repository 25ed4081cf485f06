use crate::web::models::{BirthDetails, Message};
use crate::zodiac::ZodiacSign;

pub const SYSTEM_PROMPT: &str =
    "You are an expert astrologer who provides responses in JSON format.";

/// Builds the user prompt asking for a daily, weekly and monthly horoscope
/// returned as one JSON object.
pub fn horoscope_prompt(details: &BirthDetails<'_>, sign: ZodiacSign) -> String {
    format!(
        r#"You are a professional and insightful astrologer.
A user named {name} ({gender}), born on {dob} in {place}, wants their horoscope.
Their zodiac sign is {sign}.

Based on this information, please generate a personalized horoscope.
Provide predictions for the following three timeframes:
1. Daily Horoscope: For today.
2. Weekly Horoscope: For the current week.
3. Monthly Horoscope: For the current month.

Keep the tone positive, inspiring, and engaging. Focus on key life areas like love, career, finance, and health.

IMPORTANT: Please format your entire response as a single, clean JSON object with three keys: "daily", "weekly", and "monthly". Do not include any text or explanations outside of the JSON object.

Example JSON format:
{{
  "daily": "Today is a day of...",
  "weekly": "This week you will find...",
  "monthly": "The month ahead holds..."
}}
"#,
        name = details.name,
        gender = details.gender,
        dob = details.dob,
        place = details.place_of_birth,
        sign = sign,
    )
}

pub fn horoscope_messages(details: &BirthDetails<'_>, sign: ZodiacSign) -> Vec<Message> {
    vec![
        Message::system(SYSTEM_PROMPT),
        Message::user(horoscope_prompt(details, sign)),
    ]
}

// Response fusion — turns sentiment and both toxicity signals into one
// canned reply.
//
// Decision order, first match wins:
//   1. either toxicity score above 0.5  -> moderation warning
//   2. NEGATIVE sentiment               -> dining / support / generic apology,
//                                          picked by keywords in the text
//   3. POSITIVE sentiment               -> thank-you
//   4. NEUTRAL                          -> neutral acknowledgement

use crate::text::sentiment::SentimentLabel;

/// Toxicity strictly above this triggers the moderation warning.
pub const TOXICITY_THRESHOLD: f64 = 0.5;

pub const MODERATION_WARNING: &str = "We've detected potentially harmful content in your submission. Our content moderation team will review this according to our community guidelines. If you believe this is an error, please contact our support team for assistance.";

pub const DINING_APOLOGY: &str = "We're sorry to hear about your dining experience. We take all feedback seriously and will share this with the restaurant management. Your input helps us maintain quality standards for all our customers.";

pub const SUPPORT_APOLOGY: &str = "We apologize for any inconvenience you've experienced with our service. Our customer support team will investigate this issue promptly. Thank you for bringing this to our attention.";

pub const NEGATIVE_FEEDBACK: &str = "Thank you for sharing your feedback. We take all concerns seriously and will use this information to improve our services. If you need immediate assistance, please don't hesitate to contact our support team.";

pub const POSITIVE_ACKNOWLEDGEMENT: &str = "Thank you for your positive feedback! We're delighted to hear about your great experience. Your support means a lot to us and motivates our team to continue delivering excellent service.";

pub const NEUTRAL_ACKNOWLEDGEMENT: &str = "Thank you for your feedback. We've analyzed your content and will use these insights to enhance our services. If you have any specific questions or concerns, please feel free to reach out to our support team.";

/// Which canned reply was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    ModerationWarning,
    DiningApology,
    SupportApology,
    NegativeFeedback,
    PositiveAcknowledgement,
    NeutralAcknowledgement,
}

impl ResponseKind {
    pub fn message(&self) -> &'static str {
        match self {
            ResponseKind::ModerationWarning => MODERATION_WARNING,
            ResponseKind::DiningApology => DINING_APOLOGY,
            ResponseKind::SupportApology => SUPPORT_APOLOGY,
            ResponseKind::NegativeFeedback => NEGATIVE_FEEDBACK,
            ResponseKind::PositiveAcknowledgement => POSITIVE_ACKNOWLEDGEMENT,
            ResponseKind::NeutralAcknowledgement => NEUTRAL_ACKNOWLEDGEMENT,
        }
    }
}

/// Pick the reply kind. `ocr_text` only feeds in through `image_toxicity`;
/// the keyword routing for negative feedback looks at `text` alone.
pub fn decide(
    sentiment: SentimentLabel,
    text_toxicity: f64,
    image_toxicity: f64,
    text: &str,
    _ocr_text: &str,
) -> ResponseKind {
    if text_toxicity > TOXICITY_THRESHOLD || image_toxicity > TOXICITY_THRESHOLD {
        return ResponseKind::ModerationWarning;
    }

    match sentiment {
        SentimentLabel::Negative => {
            let lower = text.to_lowercase();
            if lower.contains("restaurant") || lower.contains("food") {
                ResponseKind::DiningApology
            } else if lower.contains("service") || lower.contains("support") {
                ResponseKind::SupportApology
            } else {
                ResponseKind::NegativeFeedback
            }
        }
        SentimentLabel::Positive => ResponseKind::PositiveAcknowledgement,
        SentimentLabel::Neutral => ResponseKind::NeutralAcknowledgement,
    }
}

/// Fuse the signals into the reply text.
pub fn fuse(
    sentiment: SentimentLabel,
    text_toxicity: f64,
    image_toxicity: f64,
    text: &str,
    ocr_text: &str,
) -> &'static str {
    decide(sentiment, text_toxicity, image_toxicity, text, ocr_text).message()
}

//! Lead capture: contact form validation and the inquiry pipeline.

use crate::error::{FieldErrors, InquiryError, StoreError};
use crate::keys::StoreKey;
use crate::store::ContentStore;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use siteframe_schema::{Collection, Inquiry, InquiryStatus, KnowledgeBaseItem};
use tracing::{debug, info};

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
const MIN_PHONE_DIGITS: usize = 10;

/// Contact form fields as submitted
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InquiryForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub purpose: String,
    pub message: String,
}

impl InquiryForm {
    /// Strip everything but digits from the phone number
    pub fn normalized(mut self) -> Self {
        self.phone.retain(|c| c.is_ascii_digit());
        self
    }
}

pub struct InquiryValidator {
    email: Regex,
}

impl InquiryValidator {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            email: Regex::new(EMAIL_PATTERN)?,
        })
    }

    /// Check a normalized form; every failing field gets a message
    pub fn validate(&self, form: &InquiryForm) -> Result<(), InquiryError> {
        let mut errors = FieldErrors::new();

        if form.name.trim().is_empty() {
            errors.add("name", "Full Name is required");
        }
        if form.phone.trim().is_empty() {
            errors.add("phone", "Phone Number is required");
        } else if form.phone.chars().filter(char::is_ascii_digit).count() < MIN_PHONE_DIGITS {
            errors.add("phone", "Phone number is too short (min 10 digits)");
        }
        if form.email.trim().is_empty() {
            errors.add("email", "Email Address is required");
        } else if !self.email.is_match(&form.email) {
            errors.add("email", "Please enter a valid email address");
        }
        if form.location.trim().is_empty() {
            errors.add("location", "Preferred Location is required");
        }
        if form.message.trim().is_empty() {
            errors.add("message", "Message is required");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(InquiryError::Invalid(errors))
        }
    }
}

impl ContentStore {
    /// Validate and record a contact form submission. Returns the new id.
    pub fn submit_inquiry(&mut self, form: InquiryForm) -> Result<String, StoreError> {
        let form = form.normalized();
        self.validator.validate(&form)?;

        let now = chrono::Local::now();
        let inquiry = Inquiry {
            id: self.ids.new_id(""),
            date: now.format("%d/%m/%Y %H:%M:%S").to_string(),
            name: form.name.clone(),
            email: form.email,
            phone: form.phone,
            purpose: form.purpose,
            message: form.message,
            status: InquiryStatus::New,
            location: form.location,
        };
        let id = inquiry.id.clone();
        info!(id = %id, "inquiry received");

        self.snapshot_mut().inquiries.insert(0, inquiry);
        self.log_activity("New Inquiry", "CRM", &format!("From: {}", form.name));
        self.commit(&[StoreKey::Collection(Collection::Inquiries)])?;
        Ok(id)
    }

    /// Move an inquiry through New → Read → Contacted
    pub fn set_inquiry_status(&mut self, id: &str, status: InquiryStatus) -> Result<(), StoreError> {
        let mut patch = Map::new();
        patch.insert("status".to_string(), serde_json::to_value(status)?);
        debug!(id, status = %status, "inquiry status");
        self.update::<Inquiry>(id, &patch)
    }

    /// Append a knowledge base topic. Returns the new id.
    pub fn add_knowledge(&mut self, topic: &str, content: &str) -> Result<String, StoreError> {
        let item = KnowledgeBaseItem {
            id: self.ids.new_id(""),
            topic: topic.to_string(),
            content: content.to_string(),
        };
        let id = item.id.clone();

        self.snapshot_mut().knowledge_base.push(item);
        self.log_activity("Create", "AI Knowledge", &format!("Added topic: {}", topic));
        self.commit(&[StoreKey::Collection(Collection::KnowledgeBase)])?;
        Ok(id)
    }

    pub fn update_knowledge(&mut self, id: &str, content: &str) -> Result<(), StoreError> {
        let mut patch = Map::new();
        patch.insert("content".to_string(), Value::from(content));
        self.update::<KnowledgeBaseItem>(id, &patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> InquiryForm {
        InquiryForm {
            name: "Jane Wanjiru".to_string(),
            email: "jane@example.co.ke".to_string(),
            phone: "+254 712-345-678".to_string(),
            location: "Kitengela".to_string(),
            purpose: "Buy Land".to_string(),
            message: "Is the Kitengela plot still available?".to_string(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        let validator = InquiryValidator::new().unwrap();
        assert!(validator.validate(&valid_form().normalized()).is_ok());
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let validator = InquiryValidator::new().unwrap();
        let InquiryError::Invalid(errors) = validator.validate(&InquiryForm::default()).unwrap_err();

        assert_eq!(errors.len(), 5);
        assert_eq!(errors.get("name"), Some("Full Name is required"));
        assert_eq!(errors.get("phone"), Some("Phone Number is required"));
        assert_eq!(errors.get("message"), Some("Message is required"));
    }

    #[test]
    fn test_short_phone_and_bad_email() {
        let validator = InquiryValidator::new().unwrap();
        let form = InquiryForm {
            phone: "0712-34".to_string(),
            email: "jane@localhost".to_string(),
            ..valid_form()
        }
        .normalized();

        let InquiryError::Invalid(errors) = validator.validate(&form).unwrap_err();
        assert_eq!(errors.get("phone"), Some("Phone number is too short (min 10 digits)"));
        assert_eq!(errors.get("email"), Some("Please enter a valid email address"));
    }

    #[test]
    fn test_normalized_strips_phone() {
        assert_eq!(valid_form().normalized().phone, "254712345678");
    }
}

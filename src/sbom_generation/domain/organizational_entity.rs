use super::validation;
use crate::shared::error::SbomError;
use crate::shared::Result;

/// OrganizationalContact - a person to reach at an organization
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrganizationalContact {
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
}

impl OrganizationalContact {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: &str) -> Result<Self> {
        validation::validate("Contact name", name, validation::NAME)?;
        self.name = Some(name.to_string());
        Ok(self)
    }

    pub fn with_email(mut self, email: &str) -> Result<Self> {
        validation::validate("Contact email", email, validation::REFERENCE)?;
        if !email.contains('@') {
            return Err(SbomError::validation(format!(
                "Contact email '{}' is not an email address",
                email
            ))
            .into());
        }
        self.email = Some(email.to_string());
        Ok(self)
    }

    pub fn with_phone(mut self, phone: &str) -> Result<Self> {
        validation::validate("Contact phone", phone, validation::NAME)?;
        self.phone = Some(phone.to_string());
        Ok(self)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none()
    }
}

/// OrganizationalEntity - the supplier of a component
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrganizationalEntity {
    name: Option<String>,
    urls: Vec<String>,
    contacts: Vec<OrganizationalContact>,
}

impl OrganizationalEntity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: &str) -> Result<Self> {
        validation::validate("Supplier name", name, validation::NAME)?;
        self.name = Some(name.to_string());
        Ok(self)
    }

    pub fn with_url(mut self, url: &str) -> Result<Self> {
        validation::validate("Supplier URL", url, validation::REFERENCE)?;
        self.urls.push(url.to_string());
        Ok(self)
    }

    /// Contacts without any field are dropped
    pub fn with_contact(mut self, contact: OrganizationalContact) -> Self {
        if !contact.is_empty() {
            self.contacts.push(contact);
        }
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn contacts(&self) -> &[OrganizationalContact] {
        &self.contacts
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.urls.is_empty() && self.contacts.is_empty()
    }
}

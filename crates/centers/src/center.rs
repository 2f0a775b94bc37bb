use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use dispatchforge_core::{CenterId, DomainError, DomainResult, Entity, ValueObject};

/// Service-center status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCenterStatus {
    Active,
    Suspended,
}

/// Contact information for a service center.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl ValueObject for ContactInfo {}

/// A registered service center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCenter {
    id: CenterId,
    name: String,
    city: String,
    contact: ContactInfo,
    status: ServiceCenterStatus,
    registered_at: DateTime<Utc>,
}

impl ServiceCenter {
    /// Register a new service center, validating required fields.
    pub fn register(
        id: CenterId,
        name: impl Into<String>,
        city: impl Into<String>,
        contact: ContactInfo,
        registered_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let name = name.into();
        let city = city.into();

        if name.trim().is_empty() {
            return Err(DomainError::validation("center name cannot be empty"));
        }
        if city.trim().is_empty() {
            return Err(DomainError::validation("center city cannot be empty"));
        }
        if let Some(email) = &contact.email {
            if !email.contains('@') {
                return Err(DomainError::validation("contact email is malformed"));
            }
        }
        if let Some(phone) = &contact.phone {
            if phone.trim().is_empty() {
                return Err(DomainError::validation("contact phone cannot be blank"));
            }
        }

        Ok(Self {
            id,
            name: name.trim().to_string(),
            city: city.trim().to_string(),
            contact,
            status: ServiceCenterStatus::Active,
            registered_at,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn contact(&self) -> &ContactInfo {
        &self.contact
    }

    pub fn status(&self) -> ServiceCenterStatus {
        self.status
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    /// Suspended centers stay registered but cannot receive dispatches.
    pub fn suspend(&mut self) -> DomainResult<()> {
        if self.status == ServiceCenterStatus::Suspended {
            return Err(DomainError::conflict("center is already suspended"));
        }
        self.status = ServiceCenterStatus::Suspended;
        Ok(())
    }

    pub fn reinstate(&mut self) -> DomainResult<()> {
        if self.status == ServiceCenterStatus::Active {
            return Err(DomainError::conflict("center is already active"));
        }
        self.status = ServiceCenterStatus::Active;
        Ok(())
    }

    pub fn can_receive_dispatch(&self) -> bool {
        self.status == ServiceCenterStatus::Active
    }
}

impl Entity for ServiceCenter {
    type Id = CenterId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

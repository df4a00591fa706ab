//! Entity to model mappers

use super::entity;
use crate::contract::Client;
use sea_orm::ActiveValue::{NotSet, Set};
use svckit::search::fold;

impl From<entity::Model> for Client {
    fn from(row: entity::Model) -> Self {
        Self {
            id: row.id,
            name: row.name,
            surname: row.surname,
            email: row.email,
            phone: row.phone,
            address: row.address,
            tax_id: row.tax_id,
            identity_number: row.identity_number,
            notes: row.notes,
            active: row.active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl From<&Client> for entity::ActiveModel {
    /// The id is left unset for zero so the store assigns one on insert
    fn from(model: &Client) -> Self {
        Self {
            id: if model.id == 0 { NotSet } else { Set(model.id) },
            name: Set(model.name.clone()),
            surname: Set(model.surname.clone()),
            name_folded: Set(fold(&model.name)),
            surname_folded: Set(fold(&model.surname)),
            email: Set(model.email.clone()),
            phone: Set(model.phone.clone()),
            address: Set(model.address.clone()),
            tax_id: Set(model.tax_id.clone()),
            identity_number: Set(model.identity_number.clone()),
            notes: Set(model.notes.clone()),
            active: Set(model.active),
            created_at: Set(model.created_at),
            updated_at: Set(model.updated_at),
        }
    }
}

//! Mapper implementations for converting between DTOs and contract models

use super::dto::*;
use crate::contract::{CaseSummary, Client, ClientPatch, NewClient};

impl From<Client> for ClientDto {
    fn from(client: Client) -> Self {
        Self {
            id: client.id,
            name: client.name,
            surname: client.surname,
            email: client.email,
            phone: client.phone,
            address: client.address,
            tax_id: client.tax_id,
            identity_number: client.identity_number,
            notes: client.notes,
            active: client.active,
            created_at: client.created_at,
            updated_at: client.updated_at,
        }
    }
}

impl From<CreateClientRequest> for NewClient {
    fn from(req: CreateClientRequest) -> Self {
        Self {
            name: req.name.unwrap_or_default(),
            surname: req.surname.unwrap_or_default(),
            email: req.email,
            phone: req.phone,
            address: req.address,
            tax_id: req.tax_id,
            identity_number: req.identity_number,
            notes: req.notes,
            active: req.active,
        }
    }
}

impl From<UpdateClientRequest> for ClientPatch {
    fn from(req: UpdateClientRequest) -> Self {
        Self {
            name: req.name,
            surname: req.surname,
            email: req.email,
            phone: req.phone,
            address: req.address,
            tax_id: req.tax_id,
            identity_number: req.identity_number,
            notes: req.notes,
            active: req.active,
        }
    }
}

impl From<CaseSummary> for CaseSummaryDto {
    fn from(case: CaseSummary) -> Self {
        Self {
            id: case.id,
            case_number: case.case_number,
            title: case.title,
            status: case.status,
            open_date: case.open_date,
            close_date: case.close_date,
            client_ids: case.client_ids,
            assigned_user_id: case.assigned_user_id,
        }
    }
}

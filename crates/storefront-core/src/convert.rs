// ── Normalization ──
//
// Translation between the raw upstream shapes in `storefront-api` and
// the canonical model. All enrichment lives here: name splitting,
// synthesized role/status/timestamps, string ids, and the random stock
// level (the catalog upstream carries no inventory, so normalization is
// deliberately non-reproducible on that field).

use chrono::Utc;
use rand::Rng;

use storefront_api::catalog::types::{ProductWriteBody, RawProduct};
use storefront_api::directory::types::{RawUser, UserWriteBody};

use crate::model::{
    Address, Company, CreateProductInput, CreateUserInput, Geo, Product, Status,
    UpdateProductInput, UpdateUserInput, User, UserRole,
};

/// Split a display name on whitespace: first token becomes the first
/// name, everything after it is rejoined as the last name.
#[must_use]
pub fn split_name(name: &str) -> (String, String) {
    let mut parts = name.split_whitespace();
    let first = parts.next().unwrap_or_default().to_owned();
    let rest: Vec<&str> = parts.collect();
    (first, rest.join(" "))
}

impl From<RawUser> for User {
    fn from(raw: RawUser) -> Self {
        let (first_name, last_name) = split_name(&raw.name);
        let now = Utc::now();
        Self {
            id: raw.id.to_string(),
            email: raw.email,
            first_name,
            last_name,
            role: UserRole::User,
            status: Status::Active,
            username: (!raw.username.is_empty()).then_some(raw.username),
            phone: raw.phone,
            website: raw.website,
            address: raw.address.map(|a| Address {
                street: a.street,
                suite: a.suite,
                city: a.city,
                zipcode: a.zipcode,
                geo: a.geo.map(|g| Geo { lat: g.lat, lng: g.lng }).unwrap_or_default(),
            }),
            company: raw.company.map(|c| Company {
                name: c.name,
                catch_phrase: c.catch_phrase,
                bs: c.bs,
            }),
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<RawProduct> for Product {
    fn from(raw: RawProduct) -> Self {
        let now = Utc::now();
        Self {
            id: raw.id.to_string(),
            name: raw.title,
            description: raw.description,
            price: raw.price,
            stock: rand::rng().random_range(0..100),
            category: raw.category,
            status: Status::Active,
            image: raw.image,
            created_at: now,
            updated_at: now,
        }
    }
}

// ── Write bodies ─────────────────────────────────────────────────────

impl From<&CreateUserInput> for UserWriteBody {
    fn from(input: &CreateUserInput) -> Self {
        // Username defaults to the email local part; the upstream
        // directory requires one but callers rarely care.
        let username = input
            .email
            .split('@')
            .next()
            .unwrap_or(&input.email)
            .to_owned();
        Self {
            name: Some(format!("{} {}", input.first_name, input.last_name)),
            email: Some(input.email.clone()),
            username: Some(username),
        }
    }
}

impl From<&UpdateUserInput> for UserWriteBody {
    fn from(input: &UpdateUserInput) -> Self {
        let name = match (&input.first_name, &input.last_name) {
            (None, None) => None,
            (first, last) => Some(
                [first.as_deref(), last.as_deref()]
                    .into_iter()
                    .flatten()
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
        };
        Self {
            name,
            email: input.email.clone(),
            username: None,
        }
    }
}

/// Fallback image for products created without one; the catalog
/// upstream rejects a missing image field.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300";

impl From<&CreateProductInput> for ProductWriteBody {
    fn from(input: &CreateProductInput) -> Self {
        Self {
            title: Some(input.name.clone()),
            price: Some(input.price),
            description: Some(input.description.clone()),
            image: Some(
                input
                    .image
                    .clone()
                    .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_owned()),
            ),
            category: Some(input.category.clone()),
        }
    }
}

impl From<&UpdateProductInput> for ProductWriteBody {
    fn from(input: &UpdateProductInput) -> Self {
        Self {
            title: input.name.clone(),
            price: input.price,
            description: input.description.clone(),
            image: input.image.clone(),
            category: input.category.clone(),
        }
    }
}

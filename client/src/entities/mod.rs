//! One module per business entity, mirroring the backend's REST resources.

pub mod arps;
pub mod delivery_codes;
pub mod employees;
pub mod items;
pub mod purchase_orders;
pub mod sales_invoices;

//! Domain records for the ranch admin panel.
//!
//! Every entity is a flat, cloneable record held by an in-memory repository
//! (see `store`). There is no backing service; records only change through
//! repository replacement.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether a product or order line refers to a live bird or a store article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Bird,
    Article,
}

impl ItemKind {
    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Bird => "Ave",
            ItemKind::Article => "Artículo",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Paid,
    Pending,
    Cancelled,
}

impl OrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Paid => "Pagada",
            OrderStatus::Pending => "Pendiente",
            OrderStatus::Cancelled => "Cancelada",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: String,
    pub name: String,
    pub kind: ItemKind,
    pub price: f64,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer: String,
    pub customer_phone: String,
    pub customer_state: String,
    pub customer_address: Option<String>,
    pub items: Vec<OrderItem>,
    pub total: f64,
    pub status: OrderStatus,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductStatus {
    Available,
    Reserved,
    Sold,
}

impl ProductStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProductStatus::Available => "Disponible",
            ProductStatus::Reserved => "Reservado",
            ProductStatus::Sold => "Vendido",
        }
    }
}

/// Age class of a bird, used only when `Product::kind` is `Bird`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BirdAge {
    Gallina,
    Gallo,
    Polla,
    Pollo,
}

impl BirdAge {
    pub fn label(&self) -> &'static str {
        match self {
            BirdAge::Gallina => "Gallina",
            BirdAge::Gallo => "Gallo",
            BirdAge::Polla => "Polla",
            BirdAge::Pollo => "Pollo",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BirdPurpose {
    Combat,
    Breeding,
}

impl BirdPurpose {
    pub fn label(&self) -> &'static str {
        match self {
            BirdPurpose::Combat => "Combate",
            BirdPurpose::Breeding => "Cría",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub status: ProductStatus,
    pub kind: ItemKind,
    /// Ring identifier, present for birds only.
    pub ring_number: Option<String>,
    pub age: Option<BirdAge>,
    pub purpose: Option<BirdPurpose>,
    /// Units in stock, present for articles only.
    pub stock: Option<u32>,
    pub description: String,
    pub image_ref: String,
    pub created_at: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn label(&self) -> &'static str {
        match self {
            MediaKind::Image => "Imagen",
            MediaKind::Video => "Video",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Media {
    pub id: String,
    pub title: String,
    pub description: String,
    pub kind: MediaKind,
    pub category: String,
    pub subcategory: String,
    pub source_ref: String,
    pub likes: u32,
    pub favorite: bool,
    pub created_at: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subcategory {
    pub id: String,
    pub name: String,
    pub media_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub media_count: u32,
    pub subcategories: Vec<Subcategory>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub username: String,
    /// Kept empty after edits unless explicitly changed.
    pub password: Option<String>,
    pub active: bool,
    pub created_at: NaiveDate,
}

/// Shipping zone class for a Mexican state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShippingZone {
    Normal,
    Extended,
}

impl ShippingZone {
    pub fn label(&self) -> &'static str {
        match self {
            ShippingZone::Normal => "Normal",
            ShippingZone::Extended => "Extendida",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ShippingZone::Normal => ShippingZone::Extended,
            ShippingZone::Extended => ShippingZone::Normal,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateZone {
    pub id: String,
    pub name: String,
    pub zone: ShippingZone,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingConfig {
    pub base_cost_articles: f64,
    pub free_shipping_articles: bool,
    pub cost_normal_zone: f64,
    pub cost_extended_zone: f64,
    pub free_shipping_birds: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentAccount {
    pub bank_name: String,
    pub beneficiary: String,
    pub clabe: String,
    pub card_number: String,
}

/// Per-purpose collection channel (e.g. combat sales vs breeding sales).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentChannel {
    pub id: String,
    pub name: String,
    pub purpose: String,
    pub active: bool,
    pub clabe: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhatsAppConfig {
    pub active: bool,
    pub phone_number: String,
    /// Supports {id_orden}, {nombre_cliente}, {total}, {lista_productos}.
    pub template: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhatsAppChannel {
    pub id: String,
    pub name: String,
    pub purpose: String,
    pub active: bool,
    pub phone_number: String,
    pub template: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    pub active: bool,
    pub email: String,
}

/// Auto-release window for pending orders: after `hours` the order is
/// cancelled and its stock restored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryPolicy {
    pub active: bool,
    pub hours: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillingService {
    pub id: String,
    pub name: String,
    pub cost: f64,
    pub paid: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChargeStatus {
    Pending,
    Paid,
}

impl ChargeStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ChargeStatus::Pending => "Pendiente",
            ChargeStatus::Paid => "Pagado",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ChargeStatus::Pending => ChargeStatus::Paid,
            ChargeStatus::Paid => ChargeStatus::Pending,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtraCharge {
    pub id: String,
    pub concept: String,
    pub amount: f64,
    pub status: ChargeStatus,
    pub date: NaiveDate,
}

impl Order {
    /// Recompute the total from line items.
    pub fn computed_total(&self) -> f64 {
        self.items
            .iter()
            .map(|i| i.price * f64::from(i.quantity))
            .sum()
    }
}

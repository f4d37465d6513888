//! In-memory repositories.
//!
//! Views never own entity arrays directly; they go through a `Repository`
//! so a persistent backend could replace `MemoryRepository` without touching
//! view logic. All mutation is whole-record replacement.

pub mod seed;

use crate::domain::{
    BillingService, Category, ExtraCharge, InventoryPolicy, Media, NotificationConfig, Order,
    PaymentAccount, PaymentChannel, Product, ShippingConfig, StateZone, User, WhatsAppChannel,
    WhatsAppConfig,
};

/// A record addressable by a stable string id.
pub trait Record: Clone {
    fn id(&self) -> &str;
}

macro_rules! impl_record {
    ($($ty:ty),+) => {
        $(impl Record for $ty {
            fn id(&self) -> &str {
                &self.id
            }
        })+
    };
}

impl_record!(
    Order,
    Product,
    Media,
    Category,
    User,
    StateZone,
    PaymentChannel,
    WhatsAppChannel,
    BillingService,
    ExtraCharge
);

/// Vec-backed repository. Insertion order is preserved; new records are
/// prepended so the most recent entry lists first, matching the views.
#[derive(Debug, Clone)]
pub struct MemoryRepository<T: Record> {
    items: Vec<T>,
    id_prefix: &'static str,
    next_seq: u32,
}

impl<T: Record> MemoryRepository<T> {
    pub fn new(id_prefix: &'static str) -> Self {
        Self {
            items: Vec::new(),
            id_prefix,
            next_seq: 1,
        }
    }

    pub fn with_items(id_prefix: &'static str, items: Vec<T>) -> Self {
        let next_seq = items.len() as u32 + 1;
        Self {
            items,
            id_prefix,
            next_seq,
        }
    }

    /// Mint the next id for this repository, e.g. `ORD-006`.
    pub fn next_id(&mut self) -> String {
        let id = format!("{}{:03}", self.id_prefix, self.next_seq);
        self.next_seq += 1;
        id
    }

    pub fn all(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|r| r.id() == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        self.items.iter_mut().find(|r| r.id() == id)
    }

    /// Prepend a new record.
    pub fn insert(&mut self, record: T) {
        self.items.insert(0, record);
    }

    /// Replace the record with the same id. Returns false when absent.
    pub fn update(&mut self, record: T) -> bool {
        match self.items.iter_mut().find(|r| r.id() == record.id()) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    /// Remove by id. Returns false when absent.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|r| r.id() != id);
        self.items.len() != before
    }
}

/// Every repository and config singleton the panel works on.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub orders: MemoryRepository<Order>,
    pub products: MemoryRepository<Product>,
    pub media: MemoryRepository<Media>,
    pub categories: MemoryRepository<Category>,
    pub users: MemoryRepository<User>,
    pub zones: MemoryRepository<StateZone>,
    pub payment_channels: MemoryRepository<PaymentChannel>,
    pub whatsapp_channels: MemoryRepository<WhatsAppChannel>,
    pub billing_services: MemoryRepository<BillingService>,
    pub extra_charges: MemoryRepository<ExtraCharge>,

    pub shipping: ShippingConfig,
    pub payment: PaymentAccount,
    pub whatsapp: WhatsAppConfig,
    pub notifications: NotificationConfig,
    pub inventory: InventoryPolicy,
    /// Current logo reference, None until one is uploaded.
    pub logo: Option<String>,
}

impl Catalog {
    /// Empty catalog, used by tests that build their own records.
    pub fn empty() -> Self {
        Self {
            orders: MemoryRepository::new("ORD-"),
            products: MemoryRepository::new("PRD-"),
            media: MemoryRepository::new("MED-"),
            categories: MemoryRepository::new("CAT-"),
            users: MemoryRepository::new("USR-"),
            zones: MemoryRepository::new("state-"),
            payment_channels: MemoryRepository::new("pay-"),
            whatsapp_channels: MemoryRepository::new("wa-"),
            billing_services: MemoryRepository::new("srv-"),
            extra_charges: MemoryRepository::new("chg-"),
            shipping: ShippingConfig {
                base_cost_articles: 0.0,
                free_shipping_articles: false,
                cost_normal_zone: 0.0,
                cost_extended_zone: 0.0,
                free_shipping_birds: false,
            },
            payment: PaymentAccount {
                bank_name: String::new(),
                beneficiary: String::new(),
                clabe: String::new(),
                card_number: String::new(),
            },
            whatsapp: WhatsAppConfig {
                active: false,
                phone_number: String::new(),
                template: String::new(),
            },
            notifications: NotificationConfig {
                active: false,
                email: String::new(),
            },
            inventory: InventoryPolicy {
                active: false,
                hours: 0,
            },
            logo: None,
        }
    }

    /// Pending balance: unpaid services plus pending extra charges.
    pub fn pending_balance(&self) -> f64 {
        let services: f64 = self
            .billing_services
            .all()
            .iter()
            .filter(|s| !s.paid)
            .map(|s| s.cost)
            .sum();
        let charges: f64 = self
            .extra_charges
            .all()
            .iter()
            .filter(|c| c.status == crate::domain::ChargeStatus::Pending)
            .map(|c| c.amount)
            .sum();
        services + charges
    }
}

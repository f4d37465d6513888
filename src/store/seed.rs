//! Demo dataset loaded at startup. Nothing here persists; the catalog is
//! rebuilt on every launch.

use chrono::NaiveDate;

use super::{Catalog, MemoryRepository};
use crate::domain::*;

const MEXICO_STATES: [&str; 32] = [
    "Aguascalientes",
    "Baja California",
    "Baja California Sur",
    "Campeche",
    "Chiapas",
    "Chihuahua",
    "Ciudad de México",
    "Coahuila",
    "Colima",
    "Durango",
    "Estado de México",
    "Guanajuato",
    "Guerrero",
    "Hidalgo",
    "Jalisco",
    "Michoacán",
    "Morelos",
    "Nayarit",
    "Nuevo León",
    "Oaxaca",
    "Puebla",
    "Querétaro",
    "Quintana Roo",
    "San Luis Potosí",
    "Sinaloa",
    "Sonora",
    "Tabasco",
    "Tamaulipas",
    "Tlaxcala",
    "Veracruz",
    "Yucatán",
    "Zacatecas",
];

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

fn order_item(id: &str, name: &str, kind: ItemKind, price: f64, quantity: u32) -> OrderItem {
    OrderItem {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        price,
        quantity,
    }
}

fn seed_orders() -> Vec<Order> {
    vec![
        Order {
            id: "ORD-001".to_string(),
            customer: "María González".to_string(),
            customer_phone: "555-0123".to_string(),
            customer_state: "Jalisco".to_string(),
            customer_address: Some("Av. Vallarta 1234, Col. Americana, Guadalajara".to_string()),
            items: vec![
                order_item("item-1", "Gallo de Combate Kelso", ItemKind::Bird, 800.0, 1),
                order_item("item-2", "Alimento Premium 20kg", ItemKind::Article, 450.0, 1),
            ],
            total: 1250.0,
            status: OrderStatus::Paid,
            date: day(2023, 10, 25),
        },
        Order {
            id: "ORD-002".to_string(),
            customer: "Juan Pérez".to_string(),
            customer_phone: "555-4567".to_string(),
            customer_state: "Querétaro".to_string(),
            customer_address: Some("Calle Corregidora 56, Centro, Querétaro".to_string()),
            items: vec![order_item(
                "item-3",
                "Polla de Cría Hatch",
                ItemKind::Bird,
                850.0,
                1,
            )],
            total: 850.0,
            status: OrderStatus::Pending,
            date: day(2023, 10, 25),
        },
        Order {
            id: "ORD-003".to_string(),
            customer: "Ana López".to_string(),
            customer_phone: "555-8901".to_string(),
            customer_state: "Nuevo León".to_string(),
            customer_address: Some("Paseo de los Leones 789, Cumbres, Monterrey".to_string()),
            items: vec![order_item(
                "item-4",
                "Kit Básico Rancho",
                ItemKind::Article,
                3200.0,
                1,
            )],
            total: 3200.0,
            status: OrderStatus::Paid,
            date: day(2023, 10, 24),
        },
        Order {
            id: "ORD-004".to_string(),
            customer: "Carlos Ruiz".to_string(),
            customer_phone: "555-2345".to_string(),
            customer_state: "Veracruz".to_string(),
            customer_address: Some("Av. Independencia 432, Centro, Veracruz".to_string()),
            items: vec![order_item(
                "item-5",
                "Accesorio de Cuero",
                ItemKind::Article,
                450.0,
                1,
            )],
            total: 450.0,
            status: OrderStatus::Cancelled,
            date: day(2023, 10, 23),
        },
        Order {
            id: "ORD-005".to_string(),
            customer: "Sofía Díaz".to_string(),
            customer_phone: "555-6789".to_string(),
            customer_state: "Yucatán".to_string(),
            customer_address: Some("Calle 60 #456, Centro, Mérida".to_string()),
            items: vec![order_item(
                "item-6",
                "Set de Regalo",
                ItemKind::Article,
                1800.0,
                1,
            )],
            total: 1800.0,
            status: OrderStatus::Paid,
            date: day(2023, 10, 23),
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn bird(
    id: &str,
    name: &str,
    price: f64,
    status: ProductStatus,
    ring: &str,
    age: BirdAge,
    purpose: BirdPurpose,
    description: &str,
    date: NaiveDate,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        price,
        status,
        kind: ItemKind::Bird,
        ring_number: Some(ring.to_string()),
        age: Some(age),
        purpose: Some(purpose),
        stock: None,
        description: description.to_string(),
        image_ref: format!("media/productos/{id}.jpg"),
        created_at: date,
    }
}

fn article(
    id: &str,
    name: &str,
    price: f64,
    stock: u32,
    description: &str,
    date: NaiveDate,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        price,
        status: ProductStatus::Available,
        kind: ItemKind::Article,
        ring_number: None,
        age: None,
        purpose: None,
        stock: Some(stock),
        description: description.to_string(),
        image_ref: format!("media/productos/{id}.jpg"),
        created_at: date,
    }
}

fn seed_products() -> Vec<Product> {
    vec![
        bird(
            "PRD-001",
            "Semental Kelso Fino",
            15000.0,
            ProductStatus::Available,
            "KL-001",
            BirdAge::Gallo,
            BirdPurpose::Combat,
            "Ejemplar con excelente genética y temperamento, ideal para semental de primera línea.",
            day(2023, 10, 25),
        ),
        article(
            "PRD-002",
            "Montura de Gala Bordada",
            8500.0,
            2,
            "Trabajo artesanal en cuero con bordados de pita hechos a mano.",
            day(2023, 10, 25),
        ),
        bird(
            "PRD-003",
            "Gallina Hatch Reproductora",
            12000.0,
            ProductStatus::Reserved,
            "HT-054",
            BirdAge::Gallina,
            BirdPurpose::Breeding,
            "Madre probada con descendencia ganadora en varios derbys nacionales.",
            day(2023, 10, 25),
        ),
        bird(
            "PRD-004",
            "Gallo Radio Giro",
            9500.0,
            ProductStatus::Available,
            "RD-088",
            BirdAge::Gallo,
            BirdPurpose::Combat,
            "Giro de gran velocidad y corte.",
            day(2023, 10, 24),
        ),
        bird(
            "PRD-005",
            "Pollo Sweater Fino",
            4500.0,
            ProductStatus::Available,
            "SW-991",
            BirdAge::Pollo,
            BirdPurpose::Breeding,
            "Pollo de 8 meses con excelente estampa.",
            day(2023, 10, 23),
        ),
        article(
            "PRD-006",
            "Botas Vaqueras Exóticas",
            3200.0,
            5,
            "Botas de piel genuina con acabados premium.",
            day(2023, 10, 22),
        ),
        bird(
            "PRD-007",
            "Gallo Hatch Leiper",
            11000.0,
            ProductStatus::Sold,
            "LP-332",
            BirdAge::Gallo,
            BirdPurpose::Combat,
            "Ejemplar ganador de derby regional.",
            day(2023, 10, 21),
        ),
        article(
            "PRD-008",
            "Espuelas de Acero",
            1800.0,
            10,
            "Espuelas forjadas a mano de alta resistencia.",
            day(2023, 10, 20),
        ),
        bird(
            "PRD-009",
            "Gallina Kelso Pura",
            8000.0,
            ProductStatus::Available,
            "KL-002",
            BirdAge::Gallina,
            BirdPurpose::Breeding,
            "Madre de campeones.",
            day(2023, 10, 19),
        ),
    ]
}

fn media(
    id: &str,
    title: &str,
    description: &str,
    kind: MediaKind,
    category: &str,
    subcategory: &str,
    likes: u32,
    favorite: bool,
    date: NaiveDate,
) -> Media {
    Media {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        kind,
        category: category.to_string(),
        subcategory: subcategory.to_string(),
        source_ref: format!("media/galeria/{id}.jpg"),
        likes,
        favorite,
        created_at: date,
    }
}

fn seed_media() -> Vec<Media> {
    use MediaKind::*;
    vec![
        media("MED-001", "Atardecer en el Rancho", "Vista panorámica de las trojes principales bajo un cielo rojizo.", Image, "Paisajes", "Atardeceres", 42, true, day(2023, 10, 25)),
        media("MED-002", "Producción de Mezcal", "El proceso ancestral de destilación en nuestra molienda propia.", Video, "Cultura", "Tradiciones", 128, false, day(2023, 10, 24)),
        media("MED-003", "Ganado Angus Premium", "Nuestros mejores ejemplares listos para la exhibición nacional.", Image, "Ganado", "Angus", 85, false, day(2023, 10, 23)),
        media("MED-004", "Cena de Gala", "Ambiente preparado para eventos corporativos de alto nivel.", Image, "Eventos", "Salones", 31, true, day(2023, 10, 22)),
        media("MED-005", "Cabalgata Matutina", "Explorando los senderos vírgenes del sector sur del rancho.", Video, "Actividades", "Caballos", 56, false, day(2023, 10, 21)),
        media("MED-006", "Fachada Principal", "Arquitectura colonial restaurada con materiales locales.", Image, "Instalaciones", "Arquitectura", 19, false, day(2023, 10, 20)),
        media("MED-007", "Cosecha de Agave", "Selección manual de las piñas en su punto óptimo de madurez.", Image, "Campo", "Agave", 74, true, day(2023, 10, 19)),
        media("MED-008", "Montura Artesanal", "Trabajo detallado en cuero genuino por nuestros talabarteros.", Image, "Tienda", "Artesanías", 22, false, day(2023, 10, 18)),
        media("MED-009", "Vista Aérea Drone", "Panorámica completa que muestra la extensión de nuestras tierras.", Video, "Paisajes", "Drone", 210, true, day(2023, 10, 17)),
        media("MED-010", "Caballo Frisón", "Demostración de elegancia y potencia en el picadero principal.", Image, "Actividades", "Caballos", 145, true, day(2023, 10, 16)),
        media("MED-011", "Viñedos", "Las primeras uvas de la temporada bajo el sol de la mañana.", Image, "Campo", "Uva", 89, false, day(2023, 10, 15)),
        media("MED-012", "Barricas en Cava", "El tiempo se detiene en nuestra bodega subterránea.", Image, "Cultura", "Vino", 67, false, day(2023, 10, 14)),
        media("MED-013", "Fiesta de Vendimia", "Celebración anual con música, danza y tradición local.", Video, "Cultura", "Tradiciones", 302, true, day(2023, 10, 13)),
        media("MED-014", "Taller de Barro", "Donde la tierra se transforma en piezas únicas de arte.", Image, "Tienda", "Artesanías", 45, false, day(2023, 10, 12)),
        media("MED-015", "Jardines Interiores", "Un oasis de paz rodeado de muros históricos.", Image, "Instalaciones", "Arquitectura", 58, true, day(2023, 10, 11)),
    ]
}

fn subcat(id: &str, name: &str, media_count: u32) -> Subcategory {
    Subcategory {
        id: id.to_string(),
        name: name.to_string(),
        media_count,
    }
}

fn seed_categories() -> Vec<Category> {
    let cat = |id: &str, name: &str, media_count: u32, subcategories: Vec<Subcategory>| Category {
        id: id.to_string(),
        name: name.to_string(),
        media_count,
        subcategories,
    };
    vec![
        cat(
            "CAT-001",
            "Paisajes",
            42,
            vec![
                subcat("CAT-001-1", "Atardeceres", 18),
                subcat("CAT-001-2", "Amaneceres", 12),
                subcat("CAT-001-3", "Drone", 12),
            ],
        ),
        cat(
            "CAT-002",
            "Cultura",
            128,
            vec![
                subcat("CAT-002-1", "Gastronomía", 45),
                subcat("CAT-002-2", "Mezcal", 83),
            ],
        ),
        cat("CAT-003", "Ganado", 85, vec![]),
        cat("CAT-004", "Eventos", 31, vec![]),
        cat("CAT-005", "Actividades", 56, vec![]),
        cat("CAT-006", "Instalaciones", 19, vec![]),
        cat("CAT-007", "Campo", 74, vec![]),
        cat("CAT-008", "Tienda", 22, vec![]),
    ]
}

fn seed_users() -> Vec<User> {
    let user = |id: &str, full_name: &str, email: &str, username: &str, active: bool, date| User {
        id: id.to_string(),
        full_name: full_name.to_string(),
        email: email.to_string(),
        username: username.to_string(),
        password: None,
        active,
        created_at: date,
    };
    vec![
        user(
            "USR-001",
            "Ricardo Montes",
            "ricardo@rancho.com",
            "admin_ricardo",
            true,
            day(2023, 1, 15),
        ),
        user(
            "USR-002",
            "Ana García",
            "ana.g@rancho.com",
            "ana_ventas",
            true,
            day(2023, 5, 20),
        ),
        user(
            "USR-003",
            "Juan Pérez",
            "juan.p@rancho.com",
            "juan_logistica",
            false,
            day(2023, 8, 10),
        ),
    ]
}

fn seed_zones() -> Vec<StateZone> {
    MEXICO_STATES
        .iter()
        .enumerate()
        .map(|(index, name)| StateZone {
            id: format!("state-{index}"),
            name: (*name).to_string(),
            // Every third state starts in the extended zone.
            zone: if index % 3 == 0 {
                ShippingZone::Extended
            } else {
                ShippingZone::Normal
            },
        })
        .collect()
}

/// Build the full demo catalog.
pub fn demo_catalog() -> Catalog {
    let mut catalog = Catalog::empty();

    catalog.orders = MemoryRepository::with_items("ORD-", seed_orders());
    catalog.products = MemoryRepository::with_items("PRD-", seed_products());
    catalog.media = MemoryRepository::with_items("MED-", seed_media());
    catalog.categories = MemoryRepository::with_items("CAT-", seed_categories());
    catalog.users = MemoryRepository::with_items("USR-", seed_users());
    catalog.zones = MemoryRepository::with_items("state-", seed_zones());

    catalog.payment_channels = MemoryRepository::with_items(
        "pay-",
        vec![
            PaymentChannel {
                id: "pay-001".to_string(),
                name: "Ventas de Combate".to_string(),
                purpose: "Combate".to_string(),
                active: true,
                clabe: "012345678901234567".to_string(),
            },
            PaymentChannel {
                id: "pay-002".to_string(),
                name: "Ventas de Cría".to_string(),
                purpose: "Cría".to_string(),
                active: false,
                clabe: String::new(),
            },
        ],
    );

    catalog.whatsapp_channels = MemoryRepository::with_items(
        "wa-",
        vec![
            WhatsAppChannel {
                id: "wa-001".to_string(),
                name: "Departamento de Combate".to_string(),
                purpose: "Combate".to_string(),
                active: true,
                phone_number: String::new(),
                template: "Hola, he realizado un pedido de combate #{id_orden}.\n\nCliente: {nombre_cliente}\nTotal: ${total}\n\nItems: {lista_productos}".to_string(),
            },
            WhatsAppChannel {
                id: "wa-002".to_string(),
                name: "Departamento de Cría (Veterinario)".to_string(),
                purpose: "Cría".to_string(),
                active: true,
                phone_number: "525512345678".to_string(),
                template: "Hola Dr., he realizado un pedido de pie de cría #{id_orden}.\n\nCliente: {nombre_cliente}\nTotal: ${total}\n\nPor favor, indíqueme los cuidados previos al envío.".to_string(),
            },
        ],
    );

    catalog.billing_services = MemoryRepository::with_items(
        "srv-",
        vec![
            BillingService {
                id: "srv-001".to_string(),
                name: "Dominio".to_string(),
                cost: 727.32,
                paid: false,
            },
            BillingService {
                id: "srv-002".to_string(),
                name: "Hosting".to_string(),
                cost: 3274.59,
                paid: false,
            },
            BillingService {
                id: "srv-003".to_string(),
                name: "Mantenimiento".to_string(),
                cost: 3500.00,
                paid: false,
            },
        ],
    );

    catalog.extra_charges = MemoryRepository::with_items(
        "chg-",
        vec![ExtraCharge {
            id: "chg-001".to_string(),
            concept: "Saldo Pendiente: Desarrollo del Sistema".to_string(),
            amount: 10000.00,
            status: ChargeStatus::Pending,
            date: day(2023, 10, 25),
        }],
    );

    catalog.shipping = ShippingConfig {
        base_cost_articles: 250.0,
        free_shipping_articles: false,
        cost_normal_zone: 850.0,
        cost_extended_zone: 1250.0,
        free_shipping_birds: false,
    };
    catalog.payment = PaymentAccount {
        bank_name: "BBVA Bancomer".to_string(),
        beneficiary: "Rancho Las Trojes".to_string(),
        clabe: "012345678901234567".to_string(),
        card_number: "4152313456789012".to_string(),
    };
    catalog.whatsapp = WhatsAppConfig {
        active: true,
        phone_number: "524432020019".to_string(),
        template: "Hola, he realizado el pedido #{id_orden}.\n\nCliente: {nombre_cliente}\nTotal: ${total}\n\nItems: {lista_productos}\n\nEl envío se realiza al aeropuerto o terminal más cercano a tu estado.".to_string(),
    };
    catalog.notifications = NotificationConfig {
        active: true,
        email: "julio@rancholastrojes.com".to_string(),
    };
    catalog.inventory = InventoryPolicy {
        active: true,
        hours: 24,
    };
    catalog.logo = Some("media/identidad/logo.png".to_string());

    catalog
}

//! Navigation model: active tab, per-domain view modes, list cursors,
//! and the search query.
//!
//! One enum value per domain describes the active sub-screen. Switching
//! tabs resets the target domain's mode to its default, clears the search
//! query, and rewinds the list cursor, so no stale sub-view survives a tab
//! change.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Dashboard,
    Gallery,
    Shop,
    Orders,
    System,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Dashboard,
        Tab::Gallery,
        Tab::Shop,
        Tab::Orders,
        Tab::System,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Principal",
            Tab::Gallery => "Galería",
            Tab::Shop => "Tienda",
            Tab::Orders => "Órdenes",
            Tab::System => "Sistema",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GalleryMode {
    #[default]
    List,
    Create,
    MediaEdit,
    CategoryCreate,
    CategoriesList,
    CategoryEdit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShopMode {
    #[default]
    List,
    Create,
    Edit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrdersMode {
    #[default]
    List,
    Detail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SystemSection {
    #[default]
    Menu,
    Shipping,
    Users,
    Identity,
    Payment,
    WhatsApp,
    Inventory,
    Notifications,
    Billing,
}

impl SystemSection {
    /// Sections listed in the system menu, in display order.
    pub const MENU: [SystemSection; 8] = [
        SystemSection::Shipping,
        SystemSection::Payment,
        SystemSection::WhatsApp,
        SystemSection::Users,
        SystemSection::Identity,
        SystemSection::Inventory,
        SystemSection::Notifications,
        SystemSection::Billing,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SystemSection::Menu => "Configuración",
            SystemSection::Shipping => "Envíos",
            SystemSection::Users => "Usuarios",
            SystemSection::Identity => "Identidad",
            SystemSection::Payment => "Método de Pago",
            SystemSection::WhatsApp => "WhatsApp",
            SystemSection::Inventory => "Lib. Inventario",
            SystemSection::Notifications => "Notificaciones",
            SystemSection::Billing => "Estado de Cuenta",
        }
    }
}

/// Shipping sub-pane: cost rules or the per-state zone grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShippingPane {
    #[default]
    Config,
    Zones,
}

/// Payment and WhatsApp share the config/channels pane split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigPane {
    #[default]
    Config,
    Channels,
}

/// Identity (logo) phase machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityPhase {
    Empty,
    Preview,
    Editing,
}

/// Selection plus page for one list view.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListCursor {
    pub selected: usize,
    pub page: usize,
}

impl ListCursor {
    pub fn reset(&mut self) {
        self.selected = 0;
        self.page = 0;
    }
}

#[derive(Debug, Clone)]
pub struct NavigationModel {
    pub active_tab: Tab,
    pub gallery_mode: GalleryMode,
    pub shop_mode: ShopMode,
    pub orders_mode: OrdersMode,
    pub system_section: SystemSection,
    pub shipping_pane: ShippingPane,
    pub payment_pane: ConfigPane,
    pub whatsapp_pane: ConfigPane,
    pub identity_phase: IdentityPhase,

    /// Order shown by the detail view.
    pub detail_order: Option<String>,

    pub search_active: bool,
    pub search_query: String,

    pub gallery: ListCursor,
    pub categories: ListCursor,
    pub shop: ListCursor,
    pub orders: ListCursor,
    pub users: ListCursor,
    pub zones: ListCursor,
    pub charges: ListCursor,
    pub channels: ListCursor,
    pub system_menu: ListCursor,
}

impl NavigationModel {
    pub fn new(has_logo: bool) -> Self {
        Self {
            active_tab: Tab::Dashboard,
            gallery_mode: GalleryMode::default(),
            shop_mode: ShopMode::default(),
            orders_mode: OrdersMode::default(),
            system_section: SystemSection::default(),
            shipping_pane: ShippingPane::default(),
            payment_pane: ConfigPane::default(),
            whatsapp_pane: ConfigPane::default(),
            identity_phase: if has_logo {
                IdentityPhase::Preview
            } else {
                IdentityPhase::Empty
            },
            detail_order: None,
            search_active: false,
            search_query: String::new(),
            gallery: ListCursor::default(),
            categories: ListCursor::default(),
            shop: ListCursor::default(),
            orders: ListCursor::default(),
            users: ListCursor::default(),
            zones: ListCursor::default(),
            charges: ListCursor::default(),
            channels: ListCursor::default(),
            system_menu: ListCursor::default(),
        }
    }

    /// Switch to a tab, resetting that domain's sub-view to its default and
    /// clearing the search.
    pub fn open_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        self.clear_search();
        match tab {
            Tab::Gallery => {
                self.gallery_mode = GalleryMode::List;
                self.gallery.reset();
            }
            Tab::Shop => {
                self.shop_mode = ShopMode::List;
                self.shop.reset();
            }
            Tab::Orders => {
                self.orders_mode = OrdersMode::List;
                self.detail_order = None;
                self.orders.reset();
            }
            Tab::System => {
                self.system_section = SystemSection::Menu;
                self.shipping_pane = ShippingPane::Config;
                self.payment_pane = ConfigPane::Config;
                self.whatsapp_pane = ConfigPane::Config;
                self.system_menu.reset();
            }
            Tab::Dashboard => {}
        }
    }

    pub fn clear_search(&mut self) {
        self.search_active = false;
        self.search_query.clear();
    }

    /// Jump straight to a gallery mode (quick actions, form exits).
    pub fn goto_gallery(&mut self, mode: GalleryMode) {
        self.active_tab = Tab::Gallery;
        self.gallery_mode = mode;
        self.clear_search();
        self.gallery.reset();
    }

    pub fn goto_shop(&mut self, mode: ShopMode) {
        self.active_tab = Tab::Shop;
        self.shop_mode = mode;
        self.clear_search();
        self.shop.reset();
    }

    pub fn goto_orders_list(&mut self) {
        self.active_tab = Tab::Orders;
        self.orders_mode = OrdersMode::List;
        self.detail_order = None;
        self.clear_search();
        self.orders.reset();
    }

    pub fn goto_system(&mut self, section: SystemSection) {
        self.active_tab = Tab::System;
        self.system_section = section;
        self.shipping_pane = ShippingPane::Config;
        self.payment_pane = ConfigPane::Config;
        self.whatsapp_pane = ConfigPane::Config;
        self.clear_search();
    }

    /// Whether the current view offers the search box.
    pub fn searchable(&self) -> bool {
        match self.active_tab {
            Tab::Gallery => matches!(
                self.gallery_mode,
                GalleryMode::List | GalleryMode::CategoriesList
            ),
            Tab::Shop => self.shop_mode == ShopMode::List,
            Tab::Orders => self.orders_mode == OrdersMode::List,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_switch_resets_mode_and_search() {
        let mut nav = NavigationModel::new(true);
        nav.goto_gallery(GalleryMode::CategoryCreate);
        nav.search_query = "agave".to_string();
        nav.search_active = true;

        nav.open_tab(Tab::Gallery);
        assert_eq!(nav.gallery_mode, GalleryMode::List);
        assert!(nav.search_query.is_empty());
        assert!(!nav.search_active);
    }

    #[test]
    fn test_tab_switch_rewinds_cursor() {
        let mut nav = NavigationModel::new(true);
        nav.orders.page = 2;
        nav.orders.selected = 5;
        nav.open_tab(Tab::Orders);
        assert_eq!(nav.orders.page, 0);
        assert_eq!(nav.orders.selected, 0);
    }

    #[test]
    fn test_orders_detail_cleared_on_tab_switch() {
        let mut nav = NavigationModel::new(true);
        nav.orders_mode = OrdersMode::Detail;
        nav.detail_order = Some("ORD-002".to_string());
        nav.open_tab(Tab::Orders);
        assert_eq!(nav.orders_mode, OrdersMode::List);
        assert!(nav.detail_order.is_none());
    }

    #[test]
    fn test_system_tab_resets_panes() {
        let mut nav = NavigationModel::new(true);
        nav.goto_system(SystemSection::Shipping);
        nav.shipping_pane = ShippingPane::Zones;
        nav.open_tab(Tab::System);
        assert_eq!(nav.system_section, SystemSection::Menu);
        assert_eq!(nav.shipping_pane, ShippingPane::Config);
    }

    #[test]
    fn test_identity_phase_depends_on_logo() {
        assert_eq!(
            NavigationModel::new(true).identity_phase,
            IdentityPhase::Preview
        );
        assert_eq!(
            NavigationModel::new(false).identity_phase,
            IdentityPhase::Empty
        );
    }

    #[test]
    fn test_searchable_views() {
        let mut nav = NavigationModel::new(true);
        assert!(!nav.searchable());
        nav.goto_gallery(GalleryMode::List);
        assert!(nav.searchable());
        nav.gallery_mode = GalleryMode::Create;
        assert!(!nav.searchable());
        nav.goto_orders_list();
        assert!(nav.searchable());
        nav.orders_mode = OrdersMode::Detail;
        assert!(!nav.searchable());
    }
}

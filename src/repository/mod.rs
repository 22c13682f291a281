use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::domain::cart::{Cart, NewCart};
use crate::domain::cart_detail::{CartDetail, NewCartDetail};
use crate::domain::customer::{Customer, NewCustomer};
use crate::domain::inventory::{InventoryItem, NewInventoryItem};
use crate::domain::invoice::{Invoice, NewInvoice};
use crate::domain::invoice_detail::{InvoiceDetail, NewInvoiceDetail};
use crate::domain::login_record::{LoginRecord, NewLoginRecord};
use crate::domain::order::{NewOrder, Order};
use crate::domain::order_detail::{NewOrderDetail, OrderDetail};
use crate::domain::payment_method::{NewPaymentMethod, PaymentMethod};
use crate::domain::product::{NewProduct, Product};
use crate::domain::product_purchase::{NewProductPurchase, ProductPurchase};
use crate::domain::product_review::{NewProductReview, ProductReview};
use crate::domain::promotion::{NewPromotion, Promotion};
use crate::domain::promotion_product::{NewPromotionProduct, PromotionProduct};
use crate::domain::purchase_record::{NewPurchaseRecord, PurchaseRecord};
use crate::domain::role::{NewRole, Role};
use crate::domain::supplier::{NewSupplier, Supplier};
use crate::domain::surface_category::{NewSurfaceCategory, SurfaceCategory};
use crate::domain::user::{LoginCredentials, NewUser, User};
use crate::domain::{ListQuery, OrderStage, Searchable};

pub mod cart;
pub mod cart_detail;
pub mod client;
pub mod customer;
pub mod errors;
pub mod inventory;
pub mod invoice;
pub mod invoice_detail;
pub mod login_record;
pub mod order;
pub mod order_detail;
pub mod payment_method;
pub mod product;
pub mod product_purchase;
pub mod product_review;
pub mod promotion;
pub mod promotion_product;
pub mod purchase_record;
pub mod role;
pub mod supplier;
pub mod surface_category;
pub mod user;

#[cfg(test)]
pub mod mock;

pub use client::{ApiClient, ForwardedResponse};
pub use errors::{RepositoryError, RepositoryResult};

/// Collection paths on the commerce backend.
pub mod commerce_paths {
    pub const CUSTOMERS: &str = "/clientes/";
    pub const CARTS: &str = "/carritos/";
    pub const CART_DETAILS: &str = "/detalles_carrito/";
    pub const ORDERS: &str = "/pedidos/";
    pub const ORDER_DETAILS: &str = "/detalles_pedido/";
    pub const ORDER_HISTORY: &str = "/historial_compras/";
    pub const PAYMENT_METHODS: &str = "/metodos_pago/";
    pub const REVIEWS: &str = "/resenas/";
    pub const ROLES: &str = "/roles/";
    pub const USERS: &str = "/usuarios/";
    pub const LOGINS: &str = "/login/";
}

/// Collection paths on the catalog backend.
pub mod catalog_paths {
    pub const INVOICES: &str = "/facturacion";
    pub const INVOICE_DETAILS: &str = "/factura_detalle";
    pub const INVENTORY: &str = "/inventario";
    pub const PRODUCTS: &str = "/producto";
    pub const PROMOTIONS: &str = "/promocion";
    pub const PROMOTION_PRODUCTS: &str = "/promocion_producto";
    pub const SUPPLIERS: &str = "/proveedor";
    pub const PRODUCT_PURCHASES: &str = "/compra_producto";
    pub const SURFACES: &str = "/categoria_superficie_producto";
}

#[derive(Clone)]
/// REST-backed repository talking to the commerce and catalog backends.
pub struct RestRepository {
    commerce: ApiClient, // Arc inside, cheap to clone
    catalog: ApiClient,
}

impl RestRepository {
    pub fn new(commerce: ApiClient, catalog: ApiClient) -> Self {
        Self { commerce, catalog }
    }

    /// Build both clients from their base URLs.
    pub fn connect(
        commerce_url: &Url,
        catalog_url: &Url,
        timeout: Duration,
    ) -> RepositoryResult<Self> {
        Ok(Self::new(
            ApiClient::new(commerce_url, timeout)?,
            ApiClient::new(catalog_url, timeout)?,
        ))
    }

    /// Client for the commerce backend, also used by the `/api` proxy.
    pub fn commerce(&self) -> &ApiClient {
        &self.commerce
    }

    pub fn catalog(&self) -> &ApiClient {
        &self.catalog
    }
}

/// Filter, order by id and paginate a fully fetched collection.
///
/// Returns the number of matching records together with the requested page.
pub fn apply_list_query<T: Searchable>(items: Vec<T>, query: &ListQuery) -> (usize, Vec<T>) {
    let mut items: Vec<T> = items
        .into_iter()
        .filter(|item| query.status.is_none_or(|status| item.status() == status))
        .filter(|item| query.search.as_deref().is_none_or(|term| item.matches(term)))
        .collect();
    items.sort_by_key(|item| item.id());

    let total = items.len();
    let items = match query.pagination {
        Some(pagination) => items
            .into_iter()
            .skip(pagination.offset())
            .take(pagination.per_page)
            .collect(),
        None => items,
    };

    (total, items)
}

fn item_path(collection: &str, id: i32) -> String {
    format!("{}/{id}", collection.trim_end_matches('/'))
}

async fn fetch_list<W, D>(
    client: &ApiClient,
    path: &str,
    query: ListQuery,
) -> RepositoryResult<(usize, Vec<D>)>
where
    W: DeserializeOwned,
    D: From<W> + Searchable,
{
    let rows: Vec<W> = client.get(path).await?;
    let items = rows.into_iter().map(D::from).collect();
    Ok(apply_list_query(items, &query))
}

async fn fetch_one<W, D>(client: &ApiClient, path: &str, id: i32) -> RepositoryResult<Option<D>>
where
    W: DeserializeOwned,
    D: From<W>,
{
    Ok(client
        .get_optional::<W>(&item_path(path, id))
        .await?
        .map(D::from))
}

/// POST a create body; the backend answers with the stored record.
async fn insert<B, W, D>(client: &ApiClient, path: &str, body: &B) -> RepositoryResult<D>
where
    B: Serialize + Sync,
    W: DeserializeOwned,
    D: From<W>,
{
    client
        .post::<W, B>(path, body)
        .await?
        .map(D::from)
        .ok_or_else(|| RepositoryError::Decode(format!("no record returned by POST {path}")))
}

/// PUT a full record. When the backend does not echo the stored record,
/// the record that was sent is returned.
async fn replace<B, W, D>(
    client: &ApiClient,
    path: &str,
    id: i32,
    body: &B,
    sent: D,
) -> RepositoryResult<D>
where
    B: Serialize + Sync,
    W: DeserializeOwned,
    D: From<W>,
{
    let echoed = client
        .put::<serde_json::Value, B>(&item_path(path, id), body)
        .await?;

    Ok(echoed
        .and_then(|value| serde_json::from_value::<W>(value).ok())
        .map(D::from)
        .unwrap_or(sent))
}

#[async_trait]
pub trait CustomerReader: Send + Sync {
    async fn list_customers(&self, query: ListQuery) -> RepositoryResult<(usize, Vec<Customer>)>;
    async fn get_customer_by_id(&self, id: i32) -> RepositoryResult<Option<Customer>>;
}

#[async_trait]
pub trait CustomerWriter: Send + Sync {
    async fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer>;
    async fn update_customer(&self, customer: &Customer) -> RepositoryResult<Customer>;
    /// Mark the customer inactive. Customers are never removed.
    async fn deactivate_customer(&self, id: i32) -> RepositoryResult<Customer>;
}

#[async_trait]
pub trait CartReader: Send + Sync {
    async fn list_carts(&self, query: ListQuery) -> RepositoryResult<(usize, Vec<Cart>)>;
    async fn get_cart_by_id(&self, id: i32) -> RepositoryResult<Option<Cart>>;
}

#[async_trait]
pub trait CartWriter: Send + Sync {
    async fn create_cart(&self, new_cart: &NewCart) -> RepositoryResult<Cart>;
    async fn update_cart(&self, cart: &Cart) -> RepositoryResult<Cart>;
}

#[async_trait]
pub trait CartDetailReader: Send + Sync {
    async fn list_cart_details(
        &self,
        query: ListQuery,
    ) -> RepositoryResult<(usize, Vec<CartDetail>)>;
    async fn get_cart_detail_by_id(&self, id: i32) -> RepositoryResult<Option<CartDetail>>;
}

#[async_trait]
pub trait CartDetailWriter: Send + Sync {
    async fn create_cart_detail(&self, new_detail: &NewCartDetail) -> RepositoryResult<CartDetail>;
    async fn update_cart_detail(&self, detail: &CartDetail) -> RepositoryResult<CartDetail>;
}

#[async_trait]
pub trait OrderReader: Send + Sync {
    async fn list_orders(&self, query: ListQuery) -> RepositoryResult<(usize, Vec<Order>)>;
    async fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<Order>>;
}

#[async_trait]
pub trait OrderWriter: Send + Sync {
    async fn create_order(&self, new_order: &NewOrder) -> RepositoryResult<Order>;
    async fn update_order(&self, order: &Order) -> RepositoryResult<Order>;
    /// Change only the fulfilment stage.
    async fn update_order_stage(&self, id: i32, stage: OrderStage) -> RepositoryResult<()>;
}

#[async_trait]
pub trait OrderDetailReader: Send + Sync {
    async fn list_order_details(
        &self,
        query: ListQuery,
    ) -> RepositoryResult<(usize, Vec<OrderDetail>)>;
    async fn get_order_detail_by_id(&self, id: i32) -> RepositoryResult<Option<OrderDetail>>;
}

#[async_trait]
pub trait OrderDetailWriter: Send + Sync {
    async fn create_order_detail(
        &self,
        new_detail: &NewOrderDetail,
    ) -> RepositoryResult<OrderDetail>;
    async fn update_order_detail(&self, detail: &OrderDetail) -> RepositoryResult<OrderDetail>;
}

#[async_trait]
pub trait PurchaseRecordReader: Send + Sync {
    async fn list_purchase_records(
        &self,
        query: ListQuery,
    ) -> RepositoryResult<(usize, Vec<PurchaseRecord>)>;
    async fn get_purchase_record_by_id(&self, id: i32) -> RepositoryResult<Option<PurchaseRecord>>;
}

#[async_trait]
pub trait PurchaseRecordWriter: Send + Sync {
    async fn create_purchase_record(
        &self,
        new_record: &NewPurchaseRecord,
    ) -> RepositoryResult<PurchaseRecord>;
    async fn update_purchase_record(
        &self,
        record: &PurchaseRecord,
    ) -> RepositoryResult<PurchaseRecord>;
}

#[async_trait]
pub trait PaymentMethodReader: Send + Sync {
    async fn list_payment_methods(
        &self,
        query: ListQuery,
    ) -> RepositoryResult<(usize, Vec<PaymentMethod>)>;
    async fn get_payment_method_by_id(&self, id: i32) -> RepositoryResult<Option<PaymentMethod>>;
}

#[async_trait]
pub trait PaymentMethodWriter: Send + Sync {
    async fn create_payment_method(
        &self,
        new_method: &NewPaymentMethod,
    ) -> RepositoryResult<PaymentMethod>;
    async fn update_payment_method(
        &self,
        method: &PaymentMethod,
    ) -> RepositoryResult<PaymentMethod>;
}

#[async_trait]
pub trait ProductReviewReader: Send + Sync {
    async fn list_product_reviews(
        &self,
        query: ListQuery,
    ) -> RepositoryResult<(usize, Vec<ProductReview>)>;
    async fn get_product_review_by_id(&self, id: i32) -> RepositoryResult<Option<ProductReview>>;
}

#[async_trait]
pub trait ProductReviewWriter: Send + Sync {
    async fn create_product_review(
        &self,
        new_review: &NewProductReview,
    ) -> RepositoryResult<ProductReview>;
    async fn update_product_review(
        &self,
        review: &ProductReview,
    ) -> RepositoryResult<ProductReview>;
}

#[async_trait]
pub trait RoleReader: Send + Sync {
    async fn list_roles(&self, query: ListQuery) -> RepositoryResult<(usize, Vec<Role>)>;
    async fn get_role_by_id(&self, id: i32) -> RepositoryResult<Option<Role>>;
}

#[async_trait]
pub trait RoleWriter: Send + Sync {
    async fn create_role(&self, new_role: &NewRole) -> RepositoryResult<Role>;
    async fn update_role(&self, role: &Role) -> RepositoryResult<Role>;
}

#[async_trait]
pub trait UserReader: Send + Sync {
    async fn list_users(&self, query: ListQuery) -> RepositoryResult<(usize, Vec<User>)>;
    async fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<User>>;
}

#[async_trait]
pub trait UserWriter: Send + Sync {
    async fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
    /// Replace the user record; `password` is only sent when present.
    async fn update_user(&self, user: &User, password: Option<String>) -> RepositoryResult<User>;
}

#[async_trait]
pub trait LoginRecordReader: Send + Sync {
    async fn list_login_records(
        &self,
        query: ListQuery,
    ) -> RepositoryResult<(usize, Vec<LoginRecord>)>;
    async fn get_login_record_by_id(&self, id: i32) -> RepositoryResult<Option<LoginRecord>>;
}

#[async_trait]
pub trait LoginRecordWriter: Send + Sync {
    async fn create_login_record(
        &self,
        new_record: &NewLoginRecord,
    ) -> RepositoryResult<LoginRecord>;
    async fn update_login_record(&self, record: &LoginRecord) -> RepositoryResult<LoginRecord>;
}

/// Credential check against the users collection.
#[async_trait]
pub trait LoginGateway: Send + Sync {
    async fn submit_login(&self, credentials: &LoginCredentials) -> RepositoryResult<()>;
}

#[async_trait]
pub trait InvoiceReader: Send + Sync {
    async fn list_invoices(&self, query: ListQuery) -> RepositoryResult<(usize, Vec<Invoice>)>;
    async fn get_invoice_by_id(&self, id: i32) -> RepositoryResult<Option<Invoice>>;
}

#[async_trait]
pub trait InvoiceWriter: Send + Sync {
    async fn create_invoice(&self, new_invoice: &NewInvoice) -> RepositoryResult<Invoice>;
    async fn update_invoice(&self, invoice: &Invoice) -> RepositoryResult<Invoice>;
}

#[async_trait]
pub trait InvoiceDetailReader: Send + Sync {
    async fn list_invoice_details(
        &self,
        query: ListQuery,
    ) -> RepositoryResult<(usize, Vec<InvoiceDetail>)>;
    async fn get_invoice_detail_by_id(&self, id: i32) -> RepositoryResult<Option<InvoiceDetail>>;
}

#[async_trait]
pub trait InvoiceDetailWriter: Send + Sync {
    async fn create_invoice_detail(
        &self,
        new_detail: &NewInvoiceDetail,
    ) -> RepositoryResult<InvoiceDetail>;
    async fn update_invoice_detail(
        &self,
        detail: &InvoiceDetail,
    ) -> RepositoryResult<InvoiceDetail>;
}

#[async_trait]
pub trait InventoryReader: Send + Sync {
    async fn list_inventory_items(
        &self,
        query: ListQuery,
    ) -> RepositoryResult<(usize, Vec<InventoryItem>)>;
    async fn get_inventory_item_by_id(&self, id: i32) -> RepositoryResult<Option<InventoryItem>>;
}

#[async_trait]
pub trait InventoryWriter: Send + Sync {
    async fn create_inventory_item(
        &self,
        new_item: &NewInventoryItem,
    ) -> RepositoryResult<InventoryItem>;
    async fn update_inventory_item(&self, item: &InventoryItem) -> RepositoryResult<InventoryItem>;
}

#[async_trait]
pub trait ProductReader: Send + Sync {
    async fn list_products(&self, query: ListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
    async fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
}

#[async_trait]
pub trait ProductWriter: Send + Sync {
    async fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    async fn update_product(&self, product: &Product) -> RepositoryResult<Product>;
}

#[async_trait]
pub trait PromotionReader: Send + Sync {
    async fn list_promotions(&self, query: ListQuery) -> RepositoryResult<(usize, Vec<Promotion>)>;
    async fn get_promotion_by_id(&self, id: i32) -> RepositoryResult<Option<Promotion>>;
}

#[async_trait]
pub trait PromotionWriter: Send + Sync {
    async fn create_promotion(&self, new_promotion: &NewPromotion) -> RepositoryResult<Promotion>;
    async fn update_promotion(&self, promotion: &Promotion) -> RepositoryResult<Promotion>;
}

#[async_trait]
pub trait PromotionProductReader: Send + Sync {
    async fn list_promotion_products(
        &self,
        query: ListQuery,
    ) -> RepositoryResult<(usize, Vec<PromotionProduct>)>;
    async fn get_promotion_product_by_id(
        &self,
        id: i32,
    ) -> RepositoryResult<Option<PromotionProduct>>;
}

#[async_trait]
pub trait PromotionProductWriter: Send + Sync {
    async fn create_promotion_product(
        &self,
        new_link: &NewPromotionProduct,
    ) -> RepositoryResult<PromotionProduct>;
    async fn update_promotion_product(
        &self,
        link: &PromotionProduct,
    ) -> RepositoryResult<PromotionProduct>;
}

#[async_trait]
pub trait SupplierReader: Send + Sync {
    async fn list_suppliers(&self, query: ListQuery) -> RepositoryResult<(usize, Vec<Supplier>)>;
    async fn get_supplier_by_id(&self, id: i32) -> RepositoryResult<Option<Supplier>>;
}

#[async_trait]
pub trait SupplierWriter: Send + Sync {
    async fn create_supplier(&self, new_supplier: &NewSupplier) -> RepositoryResult<Supplier>;
    async fn update_supplier(&self, supplier: &Supplier) -> RepositoryResult<Supplier>;
}

#[async_trait]
pub trait ProductPurchaseReader: Send + Sync {
    async fn list_product_purchases(
        &self,
        query: ListQuery,
    ) -> RepositoryResult<(usize, Vec<ProductPurchase>)>;
    async fn get_product_purchase_by_id(
        &self,
        id: i32,
    ) -> RepositoryResult<Option<ProductPurchase>>;
}

#[async_trait]
pub trait ProductPurchaseWriter: Send + Sync {
    async fn create_product_purchase(
        &self,
        new_purchase: &NewProductPurchase,
    ) -> RepositoryResult<ProductPurchase>;
    async fn update_product_purchase(
        &self,
        purchase: &ProductPurchase,
    ) -> RepositoryResult<ProductPurchase>;
}

#[async_trait]
pub trait SurfaceCategoryReader: Send + Sync {
    async fn list_surface_categories(
        &self,
        query: ListQuery,
    ) -> RepositoryResult<(usize, Vec<SurfaceCategory>)>;
    async fn get_surface_category_by_id(
        &self,
        id: i32,
    ) -> RepositoryResult<Option<SurfaceCategory>>;
}

#[async_trait]
pub trait SurfaceCategoryWriter: Send + Sync {
    async fn create_surface_category(
        &self,
        new_category: &NewSurfaceCategory,
    ) -> RepositoryResult<SurfaceCategory>;
    async fn update_surface_category(
        &self,
        category: &SurfaceCategory,
    ) -> RepositoryResult<SurfaceCategory>;
}

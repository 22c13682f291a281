use async_trait::async_trait;
use mockall::mock;

use super::*;

mock! {
    /// Stand-in for [`RestRepository`] implementing every repository trait.
    pub Repository {}

    #[async_trait]
    impl CustomerReader for Repository {
        async fn list_customers(
            &self,
            query: ListQuery,
        ) -> RepositoryResult<(usize, Vec<Customer>)>;
        async fn get_customer_by_id(&self, id: i32) -> RepositoryResult<Option<Customer>>;
    }

    #[async_trait]
    impl CustomerWriter for Repository {
        async fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer>;
        async fn update_customer(&self, customer: &Customer) -> RepositoryResult<Customer>;
        async fn deactivate_customer(&self, id: i32) -> RepositoryResult<Customer>;
    }

    #[async_trait]
    impl CartReader for Repository {
        async fn list_carts(&self, query: ListQuery) -> RepositoryResult<(usize, Vec<Cart>)>;
        async fn get_cart_by_id(&self, id: i32) -> RepositoryResult<Option<Cart>>;
    }

    #[async_trait]
    impl CartWriter for Repository {
        async fn create_cart(&self, new_cart: &NewCart) -> RepositoryResult<Cart>;
        async fn update_cart(&self, cart: &Cart) -> RepositoryResult<Cart>;
    }

    #[async_trait]
    impl CartDetailReader for Repository {
        async fn list_cart_details(
            &self,
            query: ListQuery,
        ) -> RepositoryResult<(usize, Vec<CartDetail>)>;
        async fn get_cart_detail_by_id(&self, id: i32) -> RepositoryResult<Option<CartDetail>>;
    }

    #[async_trait]
    impl CartDetailWriter for Repository {
        async fn create_cart_detail(
            &self,
            new_detail: &NewCartDetail,
        ) -> RepositoryResult<CartDetail>;
        async fn update_cart_detail(&self, detail: &CartDetail) -> RepositoryResult<CartDetail>;
    }

    #[async_trait]
    impl OrderReader for Repository {
        async fn list_orders(&self, query: ListQuery) -> RepositoryResult<(usize, Vec<Order>)>;
        async fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<Order>>;
    }

    #[async_trait]
    impl OrderWriter for Repository {
        async fn create_order(&self, new_order: &NewOrder) -> RepositoryResult<Order>;
        async fn update_order(&self, order: &Order) -> RepositoryResult<Order>;
        async fn update_order_stage(&self, id: i32, stage: OrderStage) -> RepositoryResult<()>;
    }

    #[async_trait]
    impl OrderDetailReader for Repository {
        async fn list_order_details(
            &self,
            query: ListQuery,
        ) -> RepositoryResult<(usize, Vec<OrderDetail>)>;
        async fn get_order_detail_by_id(&self, id: i32) -> RepositoryResult<Option<OrderDetail>>;
    }

    #[async_trait]
    impl OrderDetailWriter for Repository {
        async fn create_order_detail(
            &self,
            new_detail: &NewOrderDetail,
        ) -> RepositoryResult<OrderDetail>;
        async fn update_order_detail(&self, detail: &OrderDetail) -> RepositoryResult<OrderDetail>;
    }

    #[async_trait]
    impl PurchaseRecordReader for Repository {
        async fn list_purchase_records(
            &self,
            query: ListQuery,
        ) -> RepositoryResult<(usize, Vec<PurchaseRecord>)>;
        async fn get_purchase_record_by_id(
            &self,
            id: i32,
        ) -> RepositoryResult<Option<PurchaseRecord>>;
    }

    #[async_trait]
    impl PurchaseRecordWriter for Repository {
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
    impl PaymentMethodReader for Repository {
        async fn list_payment_methods(
            &self,
            query: ListQuery,
        ) -> RepositoryResult<(usize, Vec<PaymentMethod>)>;
        async fn get_payment_method_by_id(
            &self,
            id: i32,
        ) -> RepositoryResult<Option<PaymentMethod>>;
    }

    #[async_trait]
    impl PaymentMethodWriter for Repository {
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
    impl ProductReviewReader for Repository {
        async fn list_product_reviews(
            &self,
            query: ListQuery,
        ) -> RepositoryResult<(usize, Vec<ProductReview>)>;
        async fn get_product_review_by_id(
            &self,
            id: i32,
        ) -> RepositoryResult<Option<ProductReview>>;
    }

    #[async_trait]
    impl ProductReviewWriter for Repository {
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
    impl RoleReader for Repository {
        async fn list_roles(&self, query: ListQuery) -> RepositoryResult<(usize, Vec<Role>)>;
        async fn get_role_by_id(&self, id: i32) -> RepositoryResult<Option<Role>>;
    }

    #[async_trait]
    impl RoleWriter for Repository {
        async fn create_role(&self, new_role: &NewRole) -> RepositoryResult<Role>;
        async fn update_role(&self, role: &Role) -> RepositoryResult<Role>;
    }

    #[async_trait]
    impl UserReader for Repository {
        async fn list_users(&self, query: ListQuery) -> RepositoryResult<(usize, Vec<User>)>;
        async fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<User>>;
    }

    #[async_trait]
    impl UserWriter for Repository {
        async fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
        async fn update_user(
            &self,
            user: &User,
            password: Option<String>,
        ) -> RepositoryResult<User>;
    }

    #[async_trait]
    impl LoginRecordReader for Repository {
        async fn list_login_records(
            &self,
            query: ListQuery,
        ) -> RepositoryResult<(usize, Vec<LoginRecord>)>;
        async fn get_login_record_by_id(&self, id: i32) -> RepositoryResult<Option<LoginRecord>>;
    }

    #[async_trait]
    impl LoginRecordWriter for Repository {
        async fn create_login_record(
            &self,
            new_record: &NewLoginRecord,
        ) -> RepositoryResult<LoginRecord>;
        async fn update_login_record(&self, record: &LoginRecord) -> RepositoryResult<LoginRecord>;
    }

    #[async_trait]
    impl LoginGateway for Repository {
        async fn submit_login(&self, credentials: &LoginCredentials) -> RepositoryResult<()>;
    }

    #[async_trait]
    impl InvoiceReader for Repository {
        async fn list_invoices(&self, query: ListQuery) -> RepositoryResult<(usize, Vec<Invoice>)>;
        async fn get_invoice_by_id(&self, id: i32) -> RepositoryResult<Option<Invoice>>;
    }

    #[async_trait]
    impl InvoiceWriter for Repository {
        async fn create_invoice(&self, new_invoice: &NewInvoice) -> RepositoryResult<Invoice>;
        async fn update_invoice(&self, invoice: &Invoice) -> RepositoryResult<Invoice>;
    }

    #[async_trait]
    impl InvoiceDetailReader for Repository {
        async fn list_invoice_details(
            &self,
            query: ListQuery,
        ) -> RepositoryResult<(usize, Vec<InvoiceDetail>)>;
        async fn get_invoice_detail_by_id(
            &self,
            id: i32,
        ) -> RepositoryResult<Option<InvoiceDetail>>;
    }

    #[async_trait]
    impl InvoiceDetailWriter for Repository {
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
    impl InventoryReader for Repository {
        async fn list_inventory_items(
            &self,
            query: ListQuery,
        ) -> RepositoryResult<(usize, Vec<InventoryItem>)>;
        async fn get_inventory_item_by_id(
            &self,
            id: i32,
        ) -> RepositoryResult<Option<InventoryItem>>;
    }

    #[async_trait]
    impl InventoryWriter for Repository {
        async fn create_inventory_item(
            &self,
            new_item: &NewInventoryItem,
        ) -> RepositoryResult<InventoryItem>;
        async fn update_inventory_item(
            &self,
            item: &InventoryItem,
        ) -> RepositoryResult<InventoryItem>;
    }

    #[async_trait]
    impl ProductReader for Repository {
        async fn list_products(&self, query: ListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
        async fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
    }

    #[async_trait]
    impl ProductWriter for Repository {
        async fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
        async fn update_product(&self, product: &Product) -> RepositoryResult<Product>;
    }

    #[async_trait]
    impl PromotionReader for Repository {
        async fn list_promotions(
            &self,
            query: ListQuery,
        ) -> RepositoryResult<(usize, Vec<Promotion>)>;
        async fn get_promotion_by_id(&self, id: i32) -> RepositoryResult<Option<Promotion>>;
    }

    #[async_trait]
    impl PromotionWriter for Repository {
        async fn create_promotion(
            &self,
            new_promotion: &NewPromotion,
        ) -> RepositoryResult<Promotion>;
        async fn update_promotion(&self, promotion: &Promotion) -> RepositoryResult<Promotion>;
    }

    #[async_trait]
    impl PromotionProductReader for Repository {
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
    impl PromotionProductWriter for Repository {
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
    impl SupplierReader for Repository {
        async fn list_suppliers(
            &self,
            query: ListQuery,
        ) -> RepositoryResult<(usize, Vec<Supplier>)>;
        async fn get_supplier_by_id(&self, id: i32) -> RepositoryResult<Option<Supplier>>;
    }

    #[async_trait]
    impl SupplierWriter for Repository {
        async fn create_supplier(&self, new_supplier: &NewSupplier) -> RepositoryResult<Supplier>;
        async fn update_supplier(&self, supplier: &Supplier) -> RepositoryResult<Supplier>;
    }

    #[async_trait]
    impl ProductPurchaseReader for Repository {
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
    impl ProductPurchaseWriter for Repository {
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
    impl SurfaceCategoryReader for Repository {
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
    impl SurfaceCategoryWriter for Repository {
        async fn create_surface_category(
            &self,
            new_category: &NewSurfaceCategory,
        ) -> RepositoryResult<SurfaceCategory>;
        async fn update_surface_category(
            &self,
            category: &SurfaceCategory,
        ) -> RepositoryResult<SurfaceCategory>;
    }
}

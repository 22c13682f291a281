use serde_json::json;

use backoffice_admin::domain::customer::NewCustomer;
use backoffice_admin::domain::user::LoginCredentials;
use backoffice_admin::domain::{ListQuery, OrderStage, RecordStatus};
use backoffice_admin::repository::{
    CustomerReader, CustomerWriter, LoginGateway, OrderReader, OrderWriter, ProductReader,
    RepositoryError,
};

mod common;

use common::{FakeBackend, customer_row, order_row, product_row, repository};

#[actix_web::test]
async fn test_customer_repository_crud() {
    let backend = FakeBackend::start();
    backend.seed(
        "clientes",
        vec![
            customer_row(2, "Luis", "Pérez", "activo"),
            customer_row(1, "Ana", "Torres", "activo"),
        ],
    );
    let repo = repository(&backend);

    let (total, items) = repo
        .list_customers(ListQuery::new())
        .await
        .expect("list customers");
    assert_eq!(total, 2);
    assert_eq!(items[0].id, 1, "rows are ordered by id");
    assert_eq!(items[0].phone, "", "null columns decode as empty text");

    let (total, items) = repo
        .list_customers(ListQuery::new().search("torres"))
        .await
        .expect("search customers");
    assert_eq!(total, 1);
    assert_eq!(items[0].first_name, "Ana");

    assert!(repo.get_customer_by_id(2).await.expect("get").is_some());
    assert!(repo.get_customer_by_id(99).await.expect("get").is_none());

    let created = repo
        .create_customer(&NewCustomer {
            user_id: 7,
            first_name: "Eva".into(),
            last_name: "Ruiz".into(),
            phone: "555-0101".into(),
            address: "Calle Luna 3".into(),
        })
        .await
        .expect("create customer");
    assert_eq!(created.id, 3);
    assert!(created.status.is_active());

    let deactivated = repo.deactivate_customer(1).await.expect("deactivate");
    assert_eq!(deactivated.status, RecordStatus::Inactive);
    let stored = backend.rows("clientes");
    let row = stored
        .iter()
        .find(|row| row["id_cliente"] == 1)
        .expect("customer 1 kept");
    assert_eq!(row["status"], "inactivo");

    let err = repo
        .deactivate_customer(42)
        .await
        .expect_err("missing customer");
    assert!(matches!(err, RepositoryError::NotFound));
}

#[actix_web::test]
async fn test_list_filters_status_and_paginates() {
    let backend = FakeBackend::start();
    backend.seed(
        "producto",
        vec![
            product_row(1, "Mesa", "A"),
            product_row(2, "Silla", "I"),
            product_row(3, "Lámpara", "A"),
            product_row(4, "Sofá", "A"),
            product_row(5, "Estante", "I"),
        ],
    );
    let repo = repository(&backend);

    let (total, items) = repo
        .list_products(ListQuery::new().status(RecordStatus::Active).paginate(2, 2))
        .await
        .expect("list products");

    assert_eq!(total, 3);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Sofá");
    assert_eq!(items[0].price.to_string(), "1250.50");
    assert!(items[0].audit.modified_by.is_none());
}

#[actix_web::test]
async fn test_order_stage_is_patched() {
    let backend = FakeBackend::start();
    backend.seed("pedidos", vec![order_row(1, "procesando", "activo")]);
    let repo = repository(&backend);

    repo.update_order_stage(1, OrderStage::Shipped)
        .await
        .expect("patch stage");

    let order = repo
        .get_order_by_id(1)
        .await
        .expect("get order")
        .expect("order exists");
    assert_eq!(order.stage, OrderStage::Shipped);

    let patch = backend
        .requests()
        .into_iter()
        .find(|request| request.method == "PATCH")
        .expect("a PATCH was sent");
    assert_eq!(patch.path, "/pedidos/1");
    assert_eq!(patch.body, Some(json!({ "estado_pedido": "enviado" })));
}

#[actix_web::test]
async fn test_update_without_echo_returns_sent_record() {
    let backend = FakeBackend::start();
    backend.seed("clientes", vec![customer_row(1, "Ana", "Torres", "activo")]);
    backend.silence_updates();
    let repo = repository(&backend);

    let mut customer = repo
        .get_customer_by_id(1)
        .await
        .expect("get")
        .expect("exists");
    customer.address = "Plaza Sol 9".into();

    let updated = repo.update_customer(&customer).await.expect("update");

    assert_eq!(updated, customer);
    assert_eq!(backend.rows("clientes")[0]["direccion"], "Plaza Sol 9");
}

#[actix_web::test]
async fn test_backend_failures_map_to_errors() {
    let backend = FakeBackend::start();
    let repo = repository(&backend);

    backend.fail("clientes", 409, "Cliente duplicado");
    let err = repo
        .create_customer(&NewCustomer {
            user_id: 1,
            first_name: "Ana".into(),
            last_name: String::new(),
            phone: String::new(),
            address: String::new(),
        })
        .await
        .expect_err("conflict");
    assert!(matches!(err, RepositoryError::Conflict(message) if message == "Cliente duplicado"));

    backend.fail("pedidos", 503, "Mantenimiento");
    let err = repo
        .list_orders(ListQuery::new())
        .await
        .expect_err("backend down");
    assert!(matches!(err, RepositoryError::Backend { status: 503, .. }));

    backend.fail("usuarios", 401, "Credenciales inválidas");
    let err = repo
        .submit_login(&LoginCredentials {
            email: "ana@example.com".into(),
            password: "secreto".into(),
        })
        .await
        .expect_err("rejected login");
    assert!(matches!(err, RepositoryError::Rejected { status: 401, .. }));
}

#[actix_web::test]
async fn test_login_posts_credentials() {
    let backend = FakeBackend::start();
    let repo = repository(&backend);

    repo.submit_login(&LoginCredentials {
        email: "ana@example.com".into(),
        password: "secreto".into(),
    })
    .await
    .expect("login accepted");

    let request = backend.requests().pop().expect("login request");
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/usuarios/");
    assert_eq!(
        request.body,
        Some(json!({ "email": "ana@example.com", "contraseña": "secreto" }))
    );
}

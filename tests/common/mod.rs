//! Helpers for integration tests.
//!
//! [`FakeBackend`] is an in-memory REST backend served by actix on an
//! ephemeral port. It keeps one JSON collection per top-level path segment
//! and answers the way the real backends do: list on the collection,
//! get/put/patch on `<collection>/<id>`, create on the collection.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use actix_web::http::StatusCode;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use serde_json::{Value, json};
use url::Url;

use backoffice_admin::repository::{ApiClient, RestRepository};

/// Identifier column of every collection the fake backends know about.
const ID_FIELDS: &[(&str, &str)] = &[
    ("clientes", "id_cliente"),
    ("carritos", "id_carrito"),
    ("detalles_carrito", "id_detalle_carrito"),
    ("pedidos", "id_pedido"),
    ("detalles_pedido", "id_detalle_pedido"),
    ("historial_compras", "id_historial"),
    ("metodos_pago", "id_pago"),
    ("resenas", "id_resena"),
    ("roles", "id_rol"),
    ("usuarios", "id_usuario"),
    ("login", "id_login"),
    ("facturacion", "factura_id"),
    ("factura_detalle", "factura_detalle_id"),
    ("inventario", "inventario_id"),
    ("producto", "producto_id"),
    ("promocion", "promocion_id"),
    ("promocion_producto", "promocion_producto_id"),
    ("proveedor", "proveedor_id"),
    ("compra_producto", "compra_producto_id"),
    ("categoria_superficie_producto", "categoria_superficie_producto_id"),
];

/// A request received by the fake backend.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Default)]
struct BackendState {
    collections: HashMap<String, Vec<Value>>,
    failures: HashMap<String, (u16, String)>,
    requests: Vec<RecordedRequest>,
    silent_updates: bool,
}

/// In-memory backend listening on `127.0.0.1`.
#[derive(Clone)]
pub struct FakeBackend {
    state: Arc<Mutex<BackendState>>,
    url: Url,
}

impl FakeBackend {
    /// Bind an ephemeral port and serve from the current actix system.
    pub fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind fake backend");
        let port = listener.local_addr().expect("local addr").port();
        let state = Arc::new(Mutex::new(BackendState::default()));

        let data = web::Data::new(state.clone());
        let server = HttpServer::new(move || {
            App::new()
                .app_data(data.clone())
                .default_service(web::to(handle))
        })
        .workers(1)
        .disable_signals()
        .listen(listener)
        .expect("listen")
        .run();
        actix_web::rt::spawn(server);

        let url = Url::parse(&format!("http://127.0.0.1:{port}/")).expect("backend url");
        Self { state, url }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Replace the rows of `collection`.
    pub fn seed(&self, collection: &str, rows: Vec<Value>) {
        self.lock().collections.insert(collection.to_string(), rows);
    }

    pub fn rows(&self, collection: &str) -> Vec<Value> {
        self.lock()
            .collections
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    /// Answer every request to `collection` with `status` and `{"message": ...}`.
    pub fn fail(&self, collection: &str, status: u16, message: &str) {
        self.lock()
            .failures
            .insert(collection.to_string(), (status, message.to_string()));
    }

    /// Stop failing requests to `collection`.
    pub fn recover(&self, collection: &str) {
        self.lock().failures.remove(collection);
    }

    /// Answer updates with an empty `204` instead of the stored record.
    pub fn silence_updates(&self) {
        self.lock().silent_updates = true;
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.lock().requests.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BackendState> {
        self.state.lock().expect("backend state")
    }
}

/// Repository whose commerce and catalog clients both point at `backend`.
pub fn repository(backend: &FakeBackend) -> RestRepository {
    let timeout = Duration::from_secs(5);
    RestRepository::new(
        ApiClient::new(backend.url(), timeout).expect("commerce client"),
        ApiClient::new(backend.url(), timeout).expect("catalog client"),
    )
}

fn id_field(collection: &str) -> &'static str {
    ID_FIELDS
        .iter()
        .find(|(name, _)| *name == collection)
        .map(|(_, field)| *field)
        .unwrap_or("id")
}

fn row_id(row: &Value, field: &str) -> Option<i64> {
    row.get(field).and_then(Value::as_i64)
}

fn message(status: StatusCode, text: &str) -> HttpResponse {
    HttpResponse::build(status).json(json!({ "message": text }))
}

async fn handle(
    req: HttpRequest,
    body: web::Bytes,
    state: web::Data<Arc<Mutex<BackendState>>>,
) -> HttpResponse {
    let segments: Vec<String> = req
        .path()
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect();
    let payload: Option<Value> = serde_json::from_slice(&body).ok();
    let method = req.method().as_str().to_string();

    let mut state = state.lock().expect("backend state");
    state.requests.push(RecordedRequest {
        method: method.clone(),
        path: req.path().to_string(),
        body: payload.clone(),
    });

    let Some(collection) = segments.first().cloned() else {
        return message(StatusCode::NOT_FOUND, "Ruta desconocida");
    };
    if let Some((status, text)) = state.failures.get(&collection).cloned() {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return message(status, &text);
    }

    let field = id_field(&collection);
    let id = segments.get(1).and_then(|segment| segment.parse::<i64>().ok());
    let silent_updates = state.silent_updates;
    let rows = state.collections.entry(collection.clone()).or_default();

    match (method.as_str(), id) {
        ("GET", None) => HttpResponse::Ok().json(rows.clone()),
        ("GET", Some(id)) => match rows.iter().find(|row| row_id(row, field) == Some(id)) {
            Some(row) => HttpResponse::Ok().json(row),
            None => message(StatusCode::NOT_FOUND, "Registro no encontrado"),
        },
        ("POST", None) => {
            let Some(Value::Object(mut row)) = payload else {
                return message(StatusCode::BAD_REQUEST, "Cuerpo inválido");
            };
            let next = rows
                .iter()
                .filter_map(|row| row_id(row, field))
                .max()
                .unwrap_or(0)
                + 1;
            row.insert(field.to_string(), json!(next));
            let row = Value::Object(row);
            rows.push(row.clone());
            HttpResponse::Created().json(row)
        }
        ("PUT" | "PATCH", Some(id)) => {
            let Some(Value::Object(changes)) = payload else {
                return message(StatusCode::BAD_REQUEST, "Cuerpo inválido");
            };
            let Some(row) = rows.iter_mut().find(|row| row_id(row, field) == Some(id)) else {
                return message(StatusCode::NOT_FOUND, "Registro no encontrado");
            };
            if let Value::Object(stored) = row {
                for (key, value) in changes {
                    stored.insert(key, value);
                }
                stored.insert(field.to_string(), json!(id));
            }
            if method == "PATCH" || silent_updates {
                HttpResponse::NoContent().finish()
            } else {
                HttpResponse::Ok().json(row.clone())
            }
        }
        _ => message(StatusCode::METHOD_NOT_ALLOWED, "Método no permitido"),
    }
}

pub fn customer_row(id: i64, first_name: &str, last_name: &str, status: &str) -> Value {
    json!({
        "id_cliente": id,
        "id_usuario": id + 100,
        "nombre": first_name,
        "apellidos": last_name,
        "telefono": null,
        "direccion": "Calle Mayor 1",
        "status": status,
    })
}

pub fn order_row(id: i64, stage: &str, status: &str) -> Value {
    json!({
        "id_pedido": id,
        "id_cliente": 1,
        "fecha_pedido": "2024-05-01 10:30:00",
        "total_pedido": 120.5,
        "estado_pedido": stage,
        "status": status,
        "empleado_mod": "eva",
    })
}

pub fn product_row(id: i64, name: &str, status: &str) -> Value {
    json!({
        "producto_id": id,
        "nombre": name,
        "descripcion": null,
        "precio": "1250.50",
        "categoria_id": 2,
        "categoria_superficie_producto_id": 3,
        "status": status,
        "fecha_creac": "2024-01-10T08:00:00",
        "fecha_mod": null,
        "usuario_mod": "",
    })
}

//! API integration tests, driven in-process through the router

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use biblioteca_server::{
    api,
    repository::{Repository, SeedData},
    AppConfig, AppState,
};

fn app_with(repository: Repository) -> Router {
    api::create_router(AppState::new(AppConfig::default(), repository))
}

fn demo_app() -> (Router, Repository) {
    let repository = Repository::new();
    repository.seed(SeedData::demo());
    (app_with(repository.clone()), repository)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

fn prestamo(id: i64, estado: &str) -> Value {
    json!({
        "idPrestamo": id,
        "cedulaUsuario": 1,
        "idLibro": 99,
        "fechaPrestamo": "2024-05-02",
        "estadoPrestamo": estado
    })
}

#[tokio::test]
async fn test_welcome() {
    let (app, _) = demo_app();
    let (status, body) = send(&app, "GET", "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["Bienvenida"].is_string());
    assert_eq!(body["recursos"], json!(["/usuarios", "/Libros", "/prestamos"]));
}

#[tokio::test]
async fn test_health_check() {
    let (app, _) = demo_app();
    let (status, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_list_demo_libros() {
    let (app, _) = demo_app();
    let (status, body) = send(&app, "GET", "/Libros", None).await;

    assert_eq!(status, StatusCode::OK);
    let libros = body.as_array().unwrap();
    assert_eq!(libros.len(), 4);
    assert_eq!(libros[1]["Titulo"], "1984");
    assert_eq!(libros[1]["Año"], 1949);
}

#[tokio::test]
async fn test_get_libro_by_encoded_title() {
    let (app, _) = demo_app();
    let (status, body) = send(&app, "GET", "/Libros/Don%20Quijote%20de%20la%20Mancha", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Autor"], "Miguel de Cervantes");
}

#[tokio::test]
async fn test_get_libro_title_is_case_sensitive() {
    let (app, _) = demo_app();
    let (status, body) = send(&app, "GET", "/Libros/la%20odisea", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Libro no encontrado.");
}

#[tokio::test]
async fn test_create_duplicate_libro_is_400() {
    let (app, repository) = demo_app();
    let (status, body) = send(
        &app,
        "POST",
        "/Libros",
        Some(json!({"Titulo": "1984", "Autor": "Otro", "Año": 2000, "Precio": 1.0})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Duplicate");
    assert_eq!(body["message"], "Libro ya existe en el registro.");
    assert_eq!(repository.libros.len(), 4);
}

#[tokio::test]
async fn test_replace_libro_keeps_position() {
    let (app, repository) = demo_app();
    let (status, body) = send(
        &app,
        "PUT",
        "/Libros/1984",
        Some(json!({"Titulo": "1984", "Autor": "George Orwell", "Año": 1949, "Precio": 30000})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Precio"], 30000.0);

    let libros = repository.libros.snapshot();
    assert_eq!(libros.len(), 4);
    assert_eq!(libros[1].precio, Some(30000.0));
}

#[tokio::test]
async fn test_delete_libro() {
    let (app, repository) = demo_app();
    let (status, body) = send(&app, "DELETE", "/Libros/La%20Odisea", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["detail"], "Libro eliminado exitosamente.");
    assert_eq!(repository.libros.len(), 3);

    let (status, _) = send(&app, "DELETE", "/Libros/La%20Odisea", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(repository.libros.len(), 3);
}

#[tokio::test]
async fn test_empty_usuarios_list_is_404() {
    let app = app_with(Repository::new());
    let (status, body) = send(&app, "GET", "/usuarios", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NoSuchData");
}

#[tokio::test]
async fn test_usuario_lifecycle() {
    let app = app_with(Repository::new());

    for cedula in [1, 2] {
        let (status, _) = send(
            &app,
            "POST",
            "/usuarios",
            Some(json!({"cedula": cedula, "nombre": format!("Usuario {}", cedula)})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(&app, "GET", "/usuarios/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["nombre"], "Usuario 2");
    assert!(body["correo"].is_null());

    let (status, body) = send(
        &app,
        "PUT",
        "/usuarios/2",
        Some(json!({"cedula": 2, "nombre": "Luisa", "correo": "luisa@example.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["correo"], "luisa@example.com");

    let (status, _) = send(&app, "DELETE", "/usuarios/1", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "GET", "/usuarios", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{"cedula": 2, "nombre": "Luisa", "telefono": null, "correo": "luisa@example.com"}]));

    let (status, _) = send(&app, "DELETE", "/usuarios/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_replace_missing_usuario_is_404() {
    let app = app_with(Repository::new());
    let (status, _) = send(
        &app,
        "PUT",
        "/usuarios/5",
        Some(json!({"cedula": 5, "nombre": "Nadie"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_duplicate_prestamo_is_400() {
    let app = app_with(Repository::new());

    let (status, body) = send(&app, "POST", "/prestamos", Some(prestamo(1, "Activo"))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["idLibro"], 99);

    let (status, body) = send(&app, "POST", "/prestamos", Some(prestamo(1, "Devuelto"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Prestamo ya existe en el registro.");
}

#[tokio::test]
async fn test_prestamo_filter_by_estado() {
    let app = app_with(Repository::new());
    send(&app, "POST", "/prestamos", Some(prestamo(1, "Activo"))).await;
    send(&app, "POST", "/prestamos", Some(prestamo(2, "Devuelto"))).await;
    send(&app, "POST", "/prestamos", Some(prestamo(3, "activo"))).await;

    let (status, body) = send(&app, "GET", "/prestamos?estado_prestamo=ACTIVO", None).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["idPrestamo"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 3]);

    let (status, _) = send(&app, "GET", "/prestamos?estado_prestamo=Atrasado", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, "GET", "/prestamos", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_prestamo_return_via_replace() {
    let app = app_with(Repository::new());
    send(&app, "POST", "/prestamos", Some(prestamo(4, "Activo"))).await;

    let mut devuelto = prestamo(4, "Devuelto");
    devuelto["fechaDevolucion"] = json!("2024-05-20");
    let (status, body) = send(&app, "PUT", "/prestamos/4", Some(devuelto)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["fechaDevolucion"], "2024-05-20");

    let (_, body) = send(&app, "GET", "/prestamos/4", None).await;
    assert_eq!(body["estadoPrestamo"], "Devuelto");
}

#[tokio::test]
async fn test_openapi_document() {
    let (app, _) = demo_app();
    let (status, body) = send(&app, "GET", "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "API Bibliotecaria");
    assert!(body["paths"]["/prestamos/{id}"].is_object());
}

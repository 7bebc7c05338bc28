use anyhow::{anyhow, Result};
use colored::*;
use reqwest::{Client, Method, StatusCode};
use serde_json::{json, Value};
use std::io::{self, Write};

#[tokio::main]
async fn main() -> Result<()> {
    println!("{}", "🚗 DevCars Testing Tool".bright_blue().bold());
    println!("{}", "=====================================".bright_blue());
    println!();

    let base_url = prompt("URL del servidor [http://localhost:3000]: ")?;
    let base_url = if base_url.is_empty() {
        "http://localhost:3000".to_string()
    } else {
        base_url.trim_end_matches('/').to_string()
    };
    let api = Api::new(base_url);

    loop {
        println!();
        println!("{}", "📋 MENÚ PRINCIPAL".bright_green().bold());
        println!("{}", "==================".bright_green());
        println!("1. 🔍 Listar carros disponibles");
        println!("2. 🚗 Registrar carro");
        println!("3. 👤 Registrar cliente");
        println!("4. 🧾 Crear orden");
        println!("5. 📄 Ver orden");
        println!("6. 🧪 Recorrido completo (smoke test)");
        println!("7. 🚪 Salir");

        let choice = prompt("Selecciona una opción (1-7): ")?;
        let result = match choice.as_str() {
            "1" => api.call(Method::GET, "/api/cars", None).await.map(|_| ()),
            "2" => register_car(&api).await,
            "3" => register_customer(&api).await,
            "4" => create_order(&api).await,
            "5" => show_order(&api).await,
            "6" => smoke_test(&api).await,
            "7" => {
                println!("{}", "👋 ¡Hasta luego!".bright_green());
                break;
            }
            _ => {
                println!("{}", "❌ Opción inválida. Intenta de nuevo.".bright_red());
                Ok(())
            }
        };

        if let Err(e) = result {
            println!("{}", format!("❌ {}", e).bright_red());
        }
    }

    Ok(())
}

struct Api {
    client: Client,
    base_url: String,
}

struct ApiResponse {
    status: StatusCode,
    location: Option<String>,
    body: Option<Value>,
}

impl Api {
    fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    async fn call(
        &self,
        method: Method,
        path: &str,
        payload: Option<Value>,
    ) -> Result<ApiResponse> {
        let url = format!("{}{}", self.base_url, path);

        println!();
        println!("{}", format!("📤 {} {}", method, url).bright_blue());
        let mut request = self.client.request(method, &url);
        if let Some(payload) = payload {
            println!("{}", serde_json::to_string_pretty(&payload)?);
            request = request.json(&payload);
        }

        let response = request.send().await?;
        let status = response.status();
        let location = response
            .headers()
            .get(reqwest::header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let text = response.text().await?;
        let body = serde_json::from_str::<Value>(&text).ok();

        let status_line = format!("📥 {}", status);
        if status.is_success() {
            println!("{}", status_line.bright_green().bold());
        } else {
            println!("{}", status_line.bright_red().bold());
        }
        if let Some(location) = &location {
            println!("{}", format!("📍 Location: {}", location).bright_cyan());
        }
        match &body {
            Some(body) => println!("{}", serde_json::to_string_pretty(body)?),
            None if !text.is_empty() => println!("{}", text),
            None => {}
        }

        Ok(ApiResponse {
            status,
            location,
            body,
        })
    }
}

fn prompt(label: &str) -> Result<String> {
    print!("{}", label.bright_yellow());
    io::stdout().flush()?;
    let mut value = String::new();
    io::stdin().read_line(&mut value)?;
    Ok(value.trim().to_string())
}

async fn register_car(api: &Api) -> Result<()> {
    let payload = json!({
        "brand": prompt("Marca: ")?,
        "model": prompt("Modelo: ")?,
        "vinCode": prompt("VIN: ")?,
        "year": prompt("Año: ")?.parse::<i32>()?,
        "color": prompt("Color: ")?,
        "price": prompt("Precio: ")?,
    });
    api.call(Method::POST, "/api/cars", Some(payload)).await?;
    Ok(())
}

async fn register_customer(api: &Api) -> Result<()> {
    let payload = json!({
        "fullName": prompt("Nombre completo: ")?,
        "document": prompt("Documento: ")?,
        "birthDate": prompt("Fecha de nacimiento (YYYY-MM-DD): ")?,
    });
    api.call(Method::POST, "/api/customers", Some(payload)).await?;
    Ok(())
}

async fn create_order(api: &Api) -> Result<()> {
    let customer: i32 = prompt("ID del cliente: ")?.parse()?;
    let car: i32 = prompt("ID del carro: ")?.parse()?;

    let mut extra_items = Vec::new();
    loop {
        let description = prompt("Item extra (vacío para terminar): ")?;
        if description.is_empty() {
            break;
        }
        let price = prompt("Precio del item: ")?;
        extra_items.push(json!({ "description": description, "price": price }));
    }

    let payload = json!({ "idCar": car, "idCustomer": customer, "extraItems": extra_items });
    api.call(
        Method::POST,
        &format!("/api/customers/{}/orders", customer),
        Some(payload),
    )
    .await?;
    Ok(())
}

async fn show_order(api: &Api) -> Result<()> {
    let customer: i32 = prompt("ID del cliente: ")?.parse()?;
    let order: i32 = prompt("ID de la orden: ")?.parse()?;
    api.call(
        Method::GET,
        &format!("/api/customers/{}/orders/{}", customer, order),
        None,
    )
    .await?;
    Ok(())
}

fn expect_status(response: &ApiResponse, expected: StatusCode, step: &str) -> Result<()> {
    if response.status != expected {
        return Err(anyhow!("{}: esperado {}, recibido {}", step, expected, response.status));
    }
    println!("{}", format!("✅ {}", step).bright_green());
    Ok(())
}

/// Recorre toda la API contra un servidor real
async fn smoke_test(api: &Api) -> Result<()> {
    println!();
    println!("{}", "🧪 RECORRIDO COMPLETO".bright_cyan().bold());
    println!("{}", "======================".bright_cyan());

    let car = api
        .call(
            Method::POST,
            "/api/cars",
            Some(json!({
                "brand": "FIAT",
                "model": "Palio",
                "vinCode": "abc147",
                "year": 2021,
                "color": "VERMELHO",
                "price": 50000,
                "productionDate": "2021-04-10"
            })),
        )
        .await?;
    expect_status(&car, StatusCode::CREATED, "Registrar carro")?;
    let car_path = car
        .location
        .ok_or_else(|| anyhow!("la respuesta no trae Location"))?;
    let car_id: i32 = car_path
        .rsplit('/')
        .next()
        .and_then(|id| id.parse().ok())
        .ok_or_else(|| anyhow!("Location inválido: {}", car_path))?;

    let too_long = api
        .call(
            Method::POST,
            "/api/cars",
            Some(json!({
                "brand": "FIAT",
                "model": "M".repeat(51),
                "vinCode": "abc148",
                "year": 2021,
                "color": "PRETO",
                "price": 1000
            })),
        )
        .await?;
    expect_status(&too_long, StatusCode::BAD_REQUEST, "Modelo de 51 caracteres rechazado")?;

    let update = api
        .call(
            Method::PUT,
            &car_path,
            Some(json!({ "color": "AZUL", "price": 50000 })),
        )
        .await?;
    expect_status(&update, StatusCode::NO_CONTENT, "Actualizar carro")?;

    let customer = api
        .call(
            Method::POST,
            "/api/customers",
            Some(json!({
                "fullName": "Maria Silva",
                "document": "123.456.789-00",
                "birthDate": "1990-05-20"
            })),
        )
        .await?;
    expect_status(&customer, StatusCode::NO_CONTENT, "Registrar cliente")?;

    // El cliente no devuelve su id; se usa el 1 como en una base vacía
    let customer_id: i32 = 1;
    let order = api
        .call(
            Method::POST,
            &format!("/api/customers/{}/orders", customer_id),
            Some(json!({
                "idCar": car_id,
                "idCustomer": customer_id,
                "extraItems": [
                    { "description": "Película", "price": 1000 },
                    { "description": "Som", "price": 2500 }
                ]
            })),
        )
        .await?;
    expect_status(&order, StatusCode::CREATED, "Crear orden")?;

    if let Some(order_path) = &order.location {
        let details = api.call(Method::GET, order_path, None).await?;
        expect_status(&details, StatusCode::OK, "Ver orden")?;
        let total = details
            .body
            .as_ref()
            .and_then(|b| b.get("totalCost"))
            .cloned()
            .unwrap_or(Value::Null);
        println!("{}", format!("💰 totalCost = {}", total).bright_green());
    }

    let suspend = api.call(Method::DELETE, &car_path, None).await?;
    expect_status(&suspend, StatusCode::NO_CONTENT, "Suspender carro")?;

    let still_there = api.call(Method::GET, &car_path, None).await?;
    expect_status(&still_there, StatusCode::OK, "Carro suspendido sigue accesible")?;

    println!();
    println!("{}", "🎉 Recorrido completo sin errores".bright_green().bold());
    Ok(())
}

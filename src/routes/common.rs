//! Common routes: index page, readiness, version.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::Html, routing::get, Json, Router};
use serde::Serialize;

/// Single-page admin form driving the product API with `fetch`.
const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Product Catalog Administration</title>
  <style>
    body { font-family: sans-serif; margin: 2em; }
    label { display: inline-block; width: 8em; }
    .row { margin: 0.4em 0; }
    #flash_message { min-height: 1.2em; font-weight: bold; }
    table { border-collapse: collapse; margin-top: 1em; }
    td, th { border: 1px solid #ccc; padding: 0.2em 0.6em; }
  </style>
</head>
<body>
  <h1>Product Catalog Administration</h1>
  <div id="flash_message"></div>
  <form id="product_form" onsubmit="return false;">
    <div class="row"><label for="product_id">ID</label><input id="product_id" type="text"></div>
    <div class="row"><label for="product_name">Name</label><input id="product_name" type="text"></div>
    <div class="row"><label for="product_description">Description</label><input id="product_description" type="text"></div>
    <div class="row"><label for="product_price">Price</label><input id="product_price" type="text"></div>
    <div class="row"><label for="product_available">Available</label>
      <select id="product_available">
        <option value=""></option>
        <option value="true">True</option>
        <option value="false">False</option>
      </select>
    </div>
    <div class="row"><label for="product_category">Category</label>
      <select id="product_category">
        <option value=""></option>
        <option value="UNKNOWN">Unknown</option>
        <option value="CLOTHS">Cloths</option>
        <option value="FOOD">Food</option>
        <option value="HOUSEWARES">Housewares</option>
        <option value="AUTOMOTIVE">Automotive</option>
        <option value="TOOLS">Tools</option>
      </select>
    </div>
    <div class="row">
      <button id="create-btn" type="button">Create</button>
      <button id="retrieve-btn" type="button">Retrieve</button>
      <button id="update-btn" type="button">Update</button>
      <button id="delete-btn" type="button">Delete</button>
      <button id="search-btn" type="button">Search</button>
      <button id="clear-btn" type="button">Clear</button>
    </div>
  </form>
  <table id="search_results">
    <thead><tr><th>ID</th><th>Name</th><th>Description</th><th>Price</th><th>Available</th><th>Category</th></tr></thead>
    <tbody></tbody>
  </table>
  <script>
    const API = "/api/products";
    const FIELDS = ["id", "name", "description", "price", "available", "category"];
    const field = (name) => document.getElementById("product_" + name);

    function flash(text) { document.getElementById("flash_message").textContent = text; }

    function fill(product) {
      FIELDS.forEach((f) => { field(f).value = product[f] === undefined ? "" : String(product[f]); });
    }

    function clearForm() { FIELDS.forEach((f) => { field(f).value = ""; }); }

    function payload() {
      return {
        name: field("name").value,
        description: field("description").value,
        price: field("price").value,
        available: field("available").value === "true",
        category: field("category").value,
      };
    }

    function cell(row, text) {
      const td = document.createElement("td");
      td.textContent = text;
      row.appendChild(td);
    }

    function showResults(products) {
      const body = document.querySelector("#search_results tbody");
      body.innerHTML = "";
      products.forEach((p) => {
        const row = document.createElement("tr");
        FIELDS.forEach((f) => cell(row, String(p[f])));
        body.appendChild(row);
      });
      if (products.length > 0) { fill(products[0]); }
    }

    async function call(method, url, body) {
      const init = { method, headers: {} };
      if (body !== undefined) {
        init.headers["Content-Type"] = "application/json";
        init.body = JSON.stringify(body);
      }
      const resp = await fetch(url, init);
      const text = await resp.text();
      const data = text ? JSON.parse(text) : null;
      if (!resp.ok) { throw new Error(data && data.message ? data.message : resp.statusText); }
      return data;
    }

    function action(id, run) {
      document.getElementById(id).addEventListener("click", async () => {
        try { await run(); } catch (e) { flash(e.message); }
      });
    }

    action("create-btn", async () => { fill(await call("POST", API, payload())); flash("Success"); });
    action("retrieve-btn", async () => { fill(await call("GET", API + "/" + field("id").value)); flash("Success"); });
    action("update-btn", async () => { fill(await call("PUT", API + "/" + field("id").value, payload())); flash("Success"); });
    action("delete-btn", async () => { await call("DELETE", API + "/" + field("id").value); clearForm(); flash("Product has been Deleted!"); });
    action("search-btn", async () => {
      const query = new URLSearchParams({
        name: field("name").value,
        availability: field("available").value,
        category: field("category").value,
      });
      showResults(await call("GET", API + "?" + query.toString()));
      flash("Success");
    });
    action("clear-btn", async () => { clearForm(); flash(""); });
  </script>
</body>
</html>
"##;

#[derive(Serialize)]
struct ReadyBody {
    status: &'static str,
    store: &'static str,
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadyBody>) {
    match state.store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(ReadyBody {
                status: "ok",
                store: "ok",
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "store not ready");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadyBody {
                    status: "degraded",
                    store: "unavailable",
                }),
            )
        }
    }
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET /, GET /ready (store check), GET /version.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}

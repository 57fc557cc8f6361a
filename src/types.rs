//! Type definitions for the REST API
//!
//! The backend speaks Spanish on the wire (`titulo`, `prestamo`, ...); these
//! structs keep English names and map the wire fields explicitly so there is
//! exactly one place where the translation happens.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ============================================================================
// Roles & identity
// ============================================================================

/// User role as reported by the backend.
///
/// Parsing is lenient: any tag we do not recognize collapses to `Estudiante`,
/// the least-privileged role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    Estudiante,
    Profesor,
    Bibliotecario,
    Admin,
    Administrador,
}

impl Role {
    pub fn parse(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "profesor" => Role::Profesor,
            "bibliotecario" => Role::Bibliotecario,
            "admin" => Role::Admin,
            "administrador" => Role::Administrador,
            _ => Role::Estudiante,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Estudiante => "estudiante",
            Role::Profesor => "profesor",
            Role::Bibliotecario => "bibliotecario",
            Role::Admin => "admin",
            Role::Administrador => "administrador",
        }
    }

    /// Roles granted access to the management views.
    pub fn is_admin_tier(&self) -> bool {
        matches!(self, Role::Admin | Role::Administrador | Role::Bibliotecario)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Estudiante => "Estudiante",
            Role::Profesor => "Profesor",
            Role::Bibliotecario => "Bibliotecario",
            Role::Admin => "Admin",
            Role::Administrador => "Administrador",
        }
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Role::parse(&tag))
    }
}

/// The authenticated user, held by the session store while a session is
/// active and serialized into the credential vault alongside the token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    #[serde(rename = "nombre")]
    pub display_name: String,
    pub email: String,
    #[serde(rename = "tipo")]
    pub role: Role,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(rename = "token")]
    pub credential: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RegisterData {
    #[serde(rename = "nombre")]
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "telefono", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "tipo")]
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

// ============================================================================
// Catalog
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "autor", default)]
    pub author: String,
    #[serde(default)]
    pub isbn: String,
    #[serde(rename = "categoria", default)]
    pub category: String,
    #[serde(rename = "ubicacion", default)]
    pub location: String,
    #[serde(rename = "disponible", default)]
    pub available: bool,
    #[serde(rename = "fechaPublicacion", default)]
    pub published_at: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    #[serde(default)]
    pub stock: i32,
    #[serde(rename = "stockDisponible", default)]
    pub stock_available: i32,
    #[serde(rename = "portada", default)]
    pub cover: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(rename = "estanteriaId", default)]
    pub shelf_id: Option<String>,
    #[serde(rename = "generoId", default)]
    pub genre_id: Option<String>,
}

/// Create/update payload for `/libros`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BookForm {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "autor")]
    pub author: String,
    pub isbn: String,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "ubicacion")]
    pub location: String,
    #[serde(rename = "fechaPublicacion")]
    pub published_at: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    pub stock: i32,
    #[serde(rename = "estanteriaId", skip_serializing_if = "Option::is_none")]
    pub shelf_id: Option<String>,
    #[serde(rename = "generoId", skip_serializing_if = "Option::is_none")]
    pub genre_id: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CatalogQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    #[serde(rename = "icono", default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(rename = "totalLibros", default)]
    pub total_books: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GenreForm {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "icono", skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shelf {
    pub id: String,
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "ubicacion", default)]
    pub location: String,
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
    #[serde(rename = "capacidad", default)]
    pub capacity: i32,
    #[serde(rename = "librosActuales", default)]
    pub current_books: i32,
    #[serde(rename = "seccion", default)]
    pub section: Option<String>,
    #[serde(rename = "piso", default)]
    pub floor: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ShelfForm {
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "ubicacion")]
    pub location: String,
    #[serde(rename = "descripcion", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "capacidad")]
    pub capacity: i32,
    #[serde(rename = "seccion", skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(rename = "piso", skip_serializing_if = "Option::is_none")]
    pub floor: Option<i32>,
}

// ============================================================================
// Circulation
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanStatus {
    #[serde(rename = "activo")]
    Active,
    #[serde(rename = "devuelto")]
    Returned,
    #[serde(rename = "vencido")]
    Overdue,
}

impl LoanStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LoanStatus::Active => "Activo",
            LoanStatus::Returned => "Devuelto",
            LoanStatus::Overdue => "Vencido",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub id: String,
    #[serde(rename = "libroId", default)]
    pub book_id: String,
    #[serde(rename = "usuarioId", default)]
    pub user_id: String,
    #[serde(rename = "fechaPrestamo", default)]
    pub loaned_at: String,
    #[serde(rename = "fechaDevolucion", default)]
    pub returned_at: Option<String>,
    #[serde(rename = "fechaVencimiento", default)]
    pub due_at: String,
    #[serde(rename = "estado")]
    pub status: LoanStatus,
    #[serde(rename = "renovaciones", default)]
    pub renewals: i32,
    #[serde(rename = "libro", default)]
    pub book: Option<Book>,
    #[serde(rename = "usuario", default)]
    pub user: Option<User>,
}

/// Body for `PATCH /prestamos/:id/devolver`.
#[derive(Debug, Clone, Serialize)]
pub struct ReturnLoanForm {
    #[serde(rename = "fechaDevolucionReal")]
    pub returned_at: String,
    #[serde(rename = "observaciones", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Body for `PATCH /prestamos/:id/renovar`.
#[derive(Debug, Clone, Serialize)]
pub struct RenewLoanForm {
    #[serde(rename = "fechaDevolucionEstimada")]
    pub due_at: String,
    #[serde(rename = "observaciones", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    #[serde(rename = "libroId", default)]
    pub book_id: String,
    #[serde(rename = "usuarioId", default)]
    pub user_id: String,
    #[serde(rename = "calificacion", default)]
    pub rating: i32,
    #[serde(rename = "comentario", default)]
    pub comment: String,
    #[serde(rename = "fechaResena", default)]
    pub reviewed_at: String,
    #[serde(rename = "aprobada", default)]
    pub approved: bool,
    #[serde(rename = "libro", default)]
    pub book: Option<Book>,
    #[serde(rename = "usuario", default)]
    pub user: Option<User>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ReviewForm {
    #[serde(rename = "libroId")]
    pub book_id: String,
    #[serde(rename = "calificacion")]
    pub rating: i32,
    #[serde(rename = "comentario")]
    pub comment: String,
}

// ============================================================================
// Users & activity (admin)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(rename = "nombre", default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,
    #[serde(rename = "fechaRegistro", default)]
    pub registered_at: String,
    #[serde(rename = "activo", default)]
    pub active: bool,
    #[serde(rename = "tipo", default)]
    pub role: Role,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UserForm {
    #[serde(rename = "nombre")]
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(rename = "telefono", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "tipo")]
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    #[serde(rename = "usuarioId", default)]
    pub user_id: String,
    #[serde(rename = "tipo", default)]
    pub kind: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    #[serde(rename = "fecha", default)]
    pub occurred_at: String,
    #[serde(rename = "ipAddress", default)]
    pub ip_address: Option<String>,
    #[serde(rename = "usuario", default)]
    pub user: Option<User>,
}

/// Body for recording or editing an activity event.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ActivityForm {
    #[serde(rename = "usuario")]
    pub user: String,
    #[serde(rename = "accion")]
    pub action: String,
    #[serde(rename = "fecha")]
    pub occurred_at: String,
}

/// Aggregate counters for the admin dashboard (`/dashboard/stats`).
///
/// Every field defaults so a partial payload still renders.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AdminStats {
    #[serde(rename = "totalLibros", default)]
    pub total_books: i64,
    #[serde(rename = "totalUsuarios", default)]
    pub total_users: i64,
    #[serde(rename = "prestamosActivos", default)]
    pub active_loans: i64,
    #[serde(rename = "totalResenas", default)]
    pub total_reviews: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parsing_is_lenient() {
        assert_eq!(Role::parse("admin"), Role::Admin);
        assert_eq!(Role::parse("ADMIN"), Role::Admin);
        assert_eq!(Role::parse("administrador"), Role::Administrador);
        assert_eq!(Role::parse("bibliotecario"), Role::Bibliotecario);
        assert_eq!(Role::parse("profesor"), Role::Profesor);
        assert_eq!(Role::parse("estudiante"), Role::Estudiante);
        // Unknown tags collapse to the least-privileged role
        assert_eq!(Role::parse("superuser"), Role::Estudiante);
        assert_eq!(Role::parse(""), Role::Estudiante);
    }

    #[test]
    fn admin_tier_covers_librarians() {
        assert!(Role::Admin.is_admin_tier());
        assert!(Role::Administrador.is_admin_tier());
        assert!(Role::Bibliotecario.is_admin_tier());
        assert!(!Role::Estudiante.is_admin_tier());
        assert!(!Role::Profesor.is_admin_tier());
    }

    #[test]
    fn identity_round_trips_through_json() {
        let identity = Identity {
            id: "42".into(),
            display_name: "Ana".into(),
            email: "ana@test.com".into(),
            role: Role::Bibliotecario,
            avatar: None,
            credential: "tok".into(),
        };
        let json = serde_json::to_string(&identity).unwrap();
        let back: Identity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, identity);
        // Wire names, not struct names
        assert!(json.contains("\"nombre\""));
        assert!(json.contains("\"tipo\":\"bibliotecario\""));
    }

    #[test]
    fn activity_form_serializes_wire_field_names() {
        let form = ActivityForm {
            user: "u-1".into(),
            action: "login".into(),
            occurred_at: "2026-08-25".into(),
        };
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "usuario": "u-1", "accion": "login", "fecha": "2026-08-25" })
        );
    }

    #[test]
    fn book_decodes_from_wire_fields() {
        let book: Book = serde_json::from_value(serde_json::json!({
            "id": "1",
            "titulo": "Cien años de soledad",
            "autor": "G. García Márquez",
            "disponible": true,
            "stockDisponible": 3
        }))
        .unwrap();
        assert_eq!(book.title, "Cien años de soledad");
        assert!(book.available);
        assert_eq!(book.stock_available, 3);
        assert_eq!(book.stock, 0);
    }
}

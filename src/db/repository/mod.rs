//! Repository Module
//!
//! One generic SQL repository serves every entity. Each entity module only
//! declares its table layout through [`Table`]; list, lookup, insert,
//! versioned update and delete are written once in [`SqlRepository`].

pub mod amenity;
pub mod hotel;
pub mod hotel_room;
pub mod room;
pub mod room_amenity;

use std::marker::PhantomData;

use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{Arguments, Encode, FromRow, Sqlite, SqlitePool, Type};
use thiserror::Error;

use crate::models::{Amenity, Entity, Hotel, HotelRoom, Room, RoomAmenity};

/// Why the store refused a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    /// The key is already taken.
    Duplicate,
    /// A referenced row does not exist.
    MissingReference,
}

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    /// The row changed since the submitted version was read.
    #[error("Concurrency conflict: {0}")]
    Conflict(String),

    #[error("Constraint violated: {0:?}")]
    Constraint(ConstraintKind),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl RepoError {
    /// Classifies integrity failures raised by an insert or update.
    fn from_write(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &err {
            if db.is_unique_violation() {
                return RepoError::Constraint(ConstraintKind::Duplicate);
            }
            if db.is_foreign_key_violation() {
                return RepoError::Constraint(ConstraintKind::MissingReference);
            }
        }
        RepoError::Database(err)
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Narrows an index listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    /// Substring the entity's searchable column must contain.
    pub search: Option<String>,
    /// Parent id for association tables (room for room amenities, hotel for hotel rooms).
    pub owner: Option<i64>,
}

impl ListFilter {
    pub fn all() -> Self {
        Self::default()
    }

    /// Empty search strings list everything.
    pub fn search(search: Option<&str>) -> Self {
        Self {
            search: search.filter(|s| !s.is_empty()).map(str::to_owned),
            owner: None,
        }
    }

    pub fn owned_by(owner: i64) -> Self {
        Self {
            search: None,
            owner: Some(owner),
        }
    }
}

/// Common repository trait for basic CRUD
#[allow(async_fn_in_trait)]
pub trait Repository {
    type Entity: Entity;

    /// Rows in insertion order.
    async fn list(&self, filter: &ListFilter) -> RepoResult<Vec<Self::Entity>>;

    async fn find(&self, key: <Self::Entity as Entity>::Key) -> RepoResult<Option<Self::Entity>>;

    async fn exists(&self, key: <Self::Entity as Entity>::Key) -> RepoResult<bool> {
        Ok(self.find(key).await?.is_some())
    }

    async fn create(&self, form: &<Self::Entity as Entity>::Form) -> RepoResult<Self::Entity>;

    /// Replaces the editable fields if the stored version still equals `version`.
    ///
    /// A mismatch is re-checked against existence: a vanished row is
    /// `NotFound`, a changed one is `Conflict`.
    async fn update(
        &self,
        key: <Self::Entity as Entity>::Key,
        form: &<Self::Entity as Entity>::Form,
        version: i64,
    ) -> RepoResult<Self::Entity>;

    /// Fails with `NotFound` when no row matches the key.
    async fn delete(&self, key: <Self::Entity as Entity>::Key) -> RepoResult<()>;
}

/// SQL layout of an entity.
///
/// `SELECT` may join other tables; its key and search columns are qualified
/// with the table alias. Write statements use the unqualified column names.
pub trait Table: Entity + for<'r> FromRow<'r, SqliteRow> {
    const TABLE: &'static str;
    const SELECT: &'static str;
    const ORDER_BY: &'static str;

    /// Predicate on the `SELECT`, one placeholder per key component.
    const KEY_FILTER: &'static str;
    /// Same predicate for `UPDATE`/`DELETE` on the bare table.
    const KEY_COLUMNS: &'static str;

    const SEARCH_COLUMN: Option<&'static str> = None;
    const OWNER_COLUMN: Option<&'static str> = None;

    /// `INSERT` statement binding the form fields in [`Table::bind_form`] order.
    const INSERT: &'static str;
    /// `SET` list binding the form fields in [`Table::bind_form`] order.
    const ASSIGN: &'static str;

    fn bind_key(key: Self::Key, args: &mut SqliteArguments<'_>) -> RepoResult<()>;

    fn bind_form(form: &Self::Form, args: &mut SqliteArguments<'_>) -> RepoResult<()>;

    /// Key of a freshly inserted row.
    fn inserted_key(form: &Self::Form, rowid: i64) -> Self::Key;

    /// Key of the row after an update; composite keys may be re-pointed.
    fn updated_key(key: Self::Key, form: &Self::Form) -> Self::Key;
}

pub(crate) fn push<'q, T>(args: &mut SqliteArguments<'q>, value: T) -> RepoResult<()>
where
    T: 'q + Encode<'q, Sqlite> + Type<Sqlite>,
{
    args.add(value)
        .map_err(|e| RepoError::Database(sqlx::Error::Encode(e)))
}

/// Generic repository over one table.
pub struct SqlRepository<E> {
    pool: SqlitePool,
    _entity: PhantomData<fn() -> E>,
}

impl<E> SqlRepository<E> {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }
}

impl<E> Clone for SqlRepository<E> {
    fn clone(&self) -> Self {
        Self::new(self.pool.clone())
    }
}

impl<E: Table> Repository for SqlRepository<E> {
    type Entity = E;

    async fn list(&self, filter: &ListFilter) -> RepoResult<Vec<E>> {
        let mut sql = String::from(E::SELECT);
        let mut args = SqliteArguments::default();
        let mut clauses = Vec::new();

        if let (Some(search), Some(column)) = (&filter.search, E::SEARCH_COLUMN) {
            clauses.push(format!("instr({column}, ?) > 0"));
            push(&mut args, search.clone())?;
        }
        if let (Some(owner), Some(column)) = (filter.owner, E::OWNER_COLUMN) {
            clauses.push(format!("{column} = ?"));
            push(&mut args, owner)?;
        }
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY ");
        sql.push_str(E::ORDER_BY);

        let rows = sqlx::query_as_with::<_, E, _>(&sql, args)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find(&self, key: E::Key) -> RepoResult<Option<E>> {
        let sql = format!("{} WHERE {}", E::SELECT, E::KEY_FILTER);
        let mut args = SqliteArguments::default();
        E::bind_key(key, &mut args)?;

        let row = sqlx::query_as_with::<_, E, _>(&sql, args)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create(&self, form: &E::Form) -> RepoResult<E> {
        let mut args = SqliteArguments::default();
        E::bind_form(form, &mut args)?;

        let done = sqlx::query_with(E::INSERT, args)
            .execute(&self.pool)
            .await
            .map_err(RepoError::from_write)?;

        let key = E::inserted_key(form, done.last_insert_rowid());
        self.find(key)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("{} {key} vanished after insert", E::NAME)))
    }

    async fn update(&self, key: E::Key, form: &E::Form, version: i64) -> RepoResult<E> {
        let sql = format!(
            "UPDATE {} SET {}, version = version + 1 WHERE {} AND version = ?",
            E::TABLE,
            E::ASSIGN,
            E::KEY_COLUMNS
        );
        let mut args = SqliteArguments::default();
        E::bind_form(form, &mut args)?;
        E::bind_key(key, &mut args)?;
        push(&mut args, version)?;

        let done = sqlx::query_with(&sql, args)
            .execute(&self.pool)
            .await
            .map_err(RepoError::from_write)?;

        if done.rows_affected() == 0 {
            return Err(if self.exists(key).await? {
                RepoError::Conflict(format!("{} {key} was modified by another request", E::NAME))
            } else {
                RepoError::NotFound(format!("{} {key}", E::NAME))
            });
        }

        let key = E::updated_key(key, form);
        self.find(key)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("{} {key}", E::NAME)))
    }

    async fn delete(&self, key: E::Key) -> RepoResult<()> {
        let sql = format!("DELETE FROM {} WHERE {}", E::TABLE, E::KEY_COLUMNS);
        let mut args = SqliteArguments::default();
        E::bind_key(key, &mut args)?;

        let done = sqlx::query_with(&sql, args).execute(&self.pool).await?;
        if done.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!("{} {key}", E::NAME)));
        }
        Ok(())
    }
}

/// Data access used by every controller, one repository per entity.
pub trait Store: Send + Sync + 'static {
    type Amenities: Repository<Entity = Amenity>;
    type Rooms: Repository<Entity = Room>;
    type RoomAmenities: Repository<Entity = RoomAmenity>;
    type Hotels: Repository<Entity = Hotel>;
    type HotelRooms: Repository<Entity = HotelRoom>;

    fn amenities(&self) -> &Self::Amenities;
    fn rooms(&self) -> &Self::Rooms;
    fn room_amenities(&self) -> &Self::RoomAmenities;
    fn hotels(&self) -> &Self::Hotels;
    fn hotel_rooms(&self) -> &Self::HotelRooms;
}

/// [`Store`] backed by a SQLite pool.
#[derive(Clone)]
pub struct SqliteStore {
    amenities: SqlRepository<Amenity>,
    rooms: SqlRepository<Room>,
    room_amenities: SqlRepository<RoomAmenity>,
    hotels: SqlRepository<Hotel>,
    hotel_rooms: SqlRepository<HotelRoom>,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            amenities: SqlRepository::new(pool.clone()),
            rooms: SqlRepository::new(pool.clone()),
            room_amenities: SqlRepository::new(pool.clone()),
            hotels: SqlRepository::new(pool.clone()),
            hotel_rooms: SqlRepository::new(pool),
        }
    }
}

impl Store for SqliteStore {
    type Amenities = SqlRepository<Amenity>;
    type Rooms = SqlRepository<Room>;
    type RoomAmenities = SqlRepository<RoomAmenity>;
    type Hotels = SqlRepository<Hotel>;
    type HotelRooms = SqlRepository<HotelRoom>;

    fn amenities(&self) -> &Self::Amenities {
        &self.amenities
    }

    fn rooms(&self) -> &Self::Rooms {
        &self.rooms
    }

    fn room_amenities(&self) -> &Self::RoomAmenities {
        &self.room_amenities
    }

    fn hotels(&self) -> &Self::Hotels {
        &self.hotels
    }

    fn hotel_rooms(&self) -> &Self::HotelRooms {
        &self.hotel_rooms
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub async fn store() -> SqliteStore {
        let pool = crate::db::memory_pool().await.unwrap();
        SqliteStore::new(pool)
    }
}

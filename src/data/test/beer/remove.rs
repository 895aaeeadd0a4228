use super::*;

/// Tests deleting a beer.
///
/// Expected: Ok with the row gone
#[tokio::test]
async fn deletes_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_beer_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let row = factory::beer::create_beer(db).await?;

    let repo = BeerRepository::new(db.clone());
    repo.remove(row.id).await.unwrap();

    let check = entity::prelude::Beer::find_by_id(row.id).one(db).await?;
    assert!(check.is_none());

    Ok(())
}

/// Tests the zero-id guard.
///
/// Expected: Err(AppError::BadRequest), storage untouched
#[tokio::test]
async fn rejects_zero_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_beer_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::beer::create_beer(db).await?;

    let repo = BeerRepository::new(db.clone());
    let result = repo.remove(0).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let count = entity::prelude::Beer::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests deleting a nonexistent beer.
///
/// Deleting an id with no matching row affects nothing and is reported as
/// success.
///
/// Expected: Ok
#[tokio::test]
async fn nonexistent_id_is_noop_success() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_beer_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::beer::create_beer(db).await?;

    let repo = BeerRepository::new(db.clone());
    let result = repo.remove(999999).await;

    assert!(result.is_ok());

    let count = entity::prelude::Beer::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

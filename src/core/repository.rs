use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};

pub trait Repository<Entity: Identifiable> {
    // registers an entity, failing if its id is already taken
    fn create(&mut self, entity: Entity) -> LibraryResult<usize>;

    // get an entity
    fn get(&self, id: &str) -> Option<&Entity>;

    // get an entity for mutation
    fn get_mut(&mut self, id: &str) -> Option<&mut Entity>;

    // all entities in insertion order
    fn all(&self) -> Vec<&Entity>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// MemoryRepository keeps entities in insertion order and resolves ids with a linear scan.
#[derive(Debug)]
pub struct MemoryRepository<Entity> {
    kind: String,
    records: Vec<Entity>,
}

impl<Entity: Identifiable> MemoryRepository<Entity> {
    pub fn new(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            records: vec![],
        }
    }
}

impl<Entity: Identifiable> Repository<Entity> for MemoryRepository<Entity> {
    fn create(&mut self, entity: Entity) -> LibraryResult<usize> {
        let id = entity.id();
        if self.get(id.as_str()).is_some() {
            return Err(LibraryError::duplicate_key(
                format!("Duplicate {} id: {}", self.kind, id).as_str()));
        }
        self.records.push(entity);
        Ok(1)
    }

    fn get(&self, id: &str) -> Option<&Entity> {
        self.records.iter().find(|e| e.id() == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Entity> {
        self.records.iter_mut().find(|e| e.id() == id)
    }

    fn all(&self) -> Vec<&Entity> {
        self.records.iter().collect()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Identifiable;
    use crate::core::library::LibraryError;
    use crate::core::repository::{MemoryRepository, Repository};

    #[derive(Debug, PartialEq)]
    struct Record {
        id: String,
        value: i64,
    }

    impl Identifiable for Record {
        fn id(&self) -> String {
            self.id.to_string()
        }
    }

    fn record(id: &str, value: i64) -> Record {
        Record { id: id.to_string(), value }
    }

    #[test]
    fn test_should_create_and_get() {
        let mut repo = MemoryRepository::new("record");
        assert!(repo.is_empty());
        assert_eq!(1, repo.create(record("r1", 1)).expect("should create"));
        assert_eq!(Some(&record("r1", 1)), repo.get("r1"));
        assert!(repo.get("r2").is_none());
        assert_eq!(1, repo.len());
    }

    #[test]
    fn test_should_reject_duplicate_id() {
        let mut repo = MemoryRepository::new("record");
        repo.create(record("r1", 1)).expect("should create");
        let err = repo.create(record("r1", 2)).expect_err("should reject duplicate");
        assert!(matches!(err, LibraryError::DuplicateKey{ .. }));
        assert_eq!("Duplicate record id: r1", err.to_string());
        assert_eq!(1, repo.get("r1").expect("should get").value);
    }

    #[test]
    fn test_should_keep_insertion_order() {
        let mut repo = MemoryRepository::new("record");
        for (i, id) in ["c", "a", "b"].iter().enumerate() {
            repo.create(record(id, i as i64)).expect("should create");
        }
        let ids: Vec<String> = repo.all().iter().map(|r| r.id()).collect();
        assert_eq!(vec!["c", "a", "b"], ids);
    }

    #[test]
    fn test_should_update_through_get_mut() {
        let mut repo = MemoryRepository::new("record");
        repo.create(record("r1", 1)).expect("should create");
        repo.get_mut("r1").expect("should get").value = 5;
        assert_eq!(5, repo.get("r1").expect("should get").value);
    }
}

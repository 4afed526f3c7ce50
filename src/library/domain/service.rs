use std::collections::HashMap;
use tracing::{info, warn};
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{ITEM_NOT_FOUND, LibraryError, LibraryResult, MEMBER_NOT_FOUND, NO_ITEMS, NO_MEMBERS};
use crate::core::repository::{MemoryRepository, Repository};
use crate::gateway::events::EventPublisher;
use crate::gateway::factory::create_publisher;
use crate::items::domain::Borrowable;
use crate::items::domain::model::LibraryItem;
use crate::items::dto::ItemDto;
use crate::library::domain::LibraryService;
use crate::library::dto::LibrarySnapshot;
use crate::members::domain::model::LibraryMember;
use crate::members::dto::MemberDto;

const ITEM_ADDED: &str = "item_added";
const MEMBER_ADDED: &str = "member_added";
const ITEM_BORROWED: &str = "item_borrowed";
const ITEM_RETURNED: &str = "item_returned";

pub struct Library {
    branch_id: String,
    item_repository: Box<dyn Repository<LibraryItem>>,
    member_repository: Box<dyn Repository<LibraryMember>>,
    events_publisher: Box<dyn EventPublisher>,
}

impl Library {
    pub fn new(config: &Configuration) -> Self {
        let publisher = create_publisher(config.publisher, config.branch_id.as_str());
        Self::with_publisher(config, publisher)
    }

    pub fn with_publisher(config: &Configuration, events_publisher: Box<dyn EventPublisher>) -> Self {
        Self::with_repositories(config,
                                Box::new(MemoryRepository::<LibraryItem>::new("item")),
                                Box::new(MemoryRepository::<LibraryMember>::new("member")),
                                events_publisher)
    }

    pub fn with_repositories(config: &Configuration, item_repository: Box<dyn Repository<LibraryItem>>,
                             member_repository: Box<dyn Repository<LibraryMember>>,
                             mut events_publisher: Box<dyn EventPublisher>) -> Self {
        for topic in [ITEM_ADDED, MEMBER_ADDED, ITEM_BORROWED, ITEM_RETURNED] {
            if let Err(err) = events_publisher.create_topic(topic) {
                warn!("failed to create topic {} {}", topic, err);
            }
        }
        Self {
            branch_id: config.branch_id.to_string(),
            item_repository,
            member_repository,
            events_publisher,
        }
    }

    // Events only report what already happened, so a failed publish never fails the operation.
    fn publish(&self, event: serde_json::Result<DomainEvent>) {
        let res = event.map_err(LibraryError::from)
            .and_then(|event| self.events_publisher.publish(&event));
        if let Err(err) = res {
            warn!("failed to publish event {}", err);
        }
    }

    fn metadata(&self, member_id: &str) -> HashMap<String, String> {
        HashMap::from([("branch_id".to_string(), self.branch_id.to_string()),
            ("member_id".to_string(), member_id.to_string())])
    }
}

impl LibraryService for Library {
    fn add_item(&mut self, item: LibraryItem) -> LibraryResult<()> {
        let dto = ItemDto::from(&item);
        self.item_repository.create(item)?;
        info!(item_id = dto.item_id.as_str(), "added {}", dto.details);
        self.publish(DomainEvent::added(
            ITEM_ADDED, "items", dto.item_id.as_str(), &HashMap::new(), &dto));
        Ok(())
    }

    fn add_member(&mut self, member: LibraryMember) -> LibraryResult<()> {
        let dto = MemberDto::from(&member);
        self.member_repository.create(member)?;
        info!(member_id = dto.member_id.as_str(), "added member {}", dto.name);
        self.publish(DomainEvent::added(
            MEMBER_ADDED, "members", dto.member_id.as_str(), &HashMap::new(), &dto));
        Ok(())
    }

    fn find_item_by_id(&self, item_id: &str) -> Option<&LibraryItem> {
        self.item_repository.get(item_id)
    }

    fn find_member_by_id(&self, member_id: &str) -> Option<&LibraryMember> {
        self.member_repository.get(member_id)
    }

    fn borrow_item(&mut self, member_id: &str, item_id: &str) -> String {
        let Some(member) = self.member_repository.get_mut(member_id) else {
            return MEMBER_NOT_FOUND.to_string();
        };
        let Some(item) = self.item_repository.get_mut(item_id) else {
            return ITEM_NOT_FOUND.to_string();
        };
        let was_available = item.is_available();
        let msg = member.borrow_item(&mut *item);
        if was_available && !item.is_available() {
            let dto = ItemDto::from(&*item);
            self.publish(DomainEvent::borrowed(
                ITEM_BORROWED, "items", item_id, &self.metadata(member_id), &dto));
        }
        msg
    }

    fn return_item(&mut self, member_id: &str, item_id: &str) -> String {
        let Some(member) = self.member_repository.get_mut(member_id) else {
            return MEMBER_NOT_FOUND.to_string();
        };
        if self.item_repository.get(item_id).is_none() {
            return ITEM_NOT_FOUND.to_string();
        }
        let borrowed_before = member.borrowed_item_ids().len();
        let msg = member.return_item(item_id, self.item_repository.as_mut());
        if member.borrowed_item_ids().len() < borrowed_before {
            if let Some(item) = self.item_repository.get(item_id) {
                let dto = ItemDto::from(item);
                self.publish(DomainEvent::returned(
                    ITEM_RETURNED, "items", item_id, &self.metadata(member_id), &dto));
            }
        }
        msg
    }

    fn list_borrowed_items(&self, member_id: &str) -> String {
        match self.member_repository.get(member_id) {
            Some(member) => member.list_borrowed_items(self.item_repository.as_ref()),
            None => MEMBER_NOT_FOUND.to_string(),
        }
    }

    fn library_summary(&self) -> String {
        let items_summary = if self.item_repository.is_empty() {
            NO_ITEMS.to_string()
        } else {
            self.item_repository.all().iter().map(|item| item.details()).collect::<Vec<String>>().join("\n")
        };

        let members_summary = if self.member_repository.is_empty() {
            NO_MEMBERS.to_string()
        } else {
            self.member_repository.all().iter().map(|member| member.summary()).collect::<Vec<String>>().join("\n")
        };

        format!("=== Items ===\n{}\n\n=== Members ===\n{}", items_summary, members_summary)
    }

    fn snapshot(&self) -> LibrarySnapshot {
        LibrarySnapshot {
            branch_id: self.branch_id.to_string(),
            items: self.item_repository.all().into_iter().map(ItemDto::from).collect(),
            members: self.member_repository.all().into_iter().map(MemberDto::from).collect(),
        }
    }
}

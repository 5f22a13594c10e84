use soroban_sdk::{contracttype, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContractCreatedEvent {
    pub contract_number: String,
    pub owned_by: String,
    pub amount: i128,
    pub number_of_parts: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssigneeCreatedEvent {
    pub user_id: u64,
    pub is_signed: bool,
    pub status: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssigneeSignedEvent {
    pub user_id: u64,
    pub signed_date: String,
    pub status: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EntryWrittenEvent {
    pub key: String,
    pub size: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EntryDeletedEvent {
    pub key: String,
}

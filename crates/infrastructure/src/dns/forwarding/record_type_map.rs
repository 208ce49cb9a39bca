use hickory_proto::rr::RecordType as HickoryRecordType;
use ns_takeover_domain::QueryType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Convert domain QueryType → hickory RecordType (for building queries)
    pub fn to_hickory(query_type: QueryType) -> HickoryRecordType {
        match query_type {
            QueryType::A => HickoryRecordType::A,
            QueryType::AAAA => HickoryRecordType::AAAA,
            QueryType::CNAME => HickoryRecordType::CNAME,
            QueryType::MX => HickoryRecordType::MX,
            QueryType::NS => HickoryRecordType::NS,
            QueryType::TXT => HickoryRecordType::TXT,
        }
    }
}

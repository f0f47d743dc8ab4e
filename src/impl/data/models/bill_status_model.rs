use std::str::FromStr;

use crate::entities::BillStatus;

/// Raw status code as stored on a bill.
#[derive(Debug)]
pub(crate) struct BillStatusModel(BillStatus);

impl FromStr for BillStatusModel {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(BillStatusModel(BillStatus::Pending)),
            "accepted" => Ok(BillStatusModel(BillStatus::Accepted)),
            "refused" => Ok(BillStatusModel(BillStatus::Refused)),
            _ => Err(()),
        }
    }
}

impl From<BillStatusModel> for BillStatus {
    fn from(model: BillStatusModel) -> Self {
        model.0
    }
}

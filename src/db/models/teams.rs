use diesel::prelude::*;
use serde::Serialize;

use crate::db::postgres::schema::teams;

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Eq, Serialize)]
#[diesel(table_name = teams)]
#[diesel(primary_key(team_id))]
pub struct Team {
    pub team_id: i32,
    pub name: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = teams)]
pub struct NewTeam {
    pub name: String,
}

use super::*;

/// Tests the compiled-in role table.
///
/// Expected: users hold no rights, admins hold every permission
#[test]
fn maps_roles_to_rights() {
    assert!(Role::User.rights().is_empty());
    assert_eq!(
        Role::Admin.rights(),
        &[
            Permission::GetUsers,
            Permission::ManageUsers,
            Permission::ManageServers
        ]
    );
}

/// Tests role names resolve to roles and unknown names don't.
#[test]
fn parses_role_names() {
    assert_eq!(Role::from_name("admin"), Some(Role::Admin));
    assert_eq!(Role::from_name("user"), Some(Role::User));
    assert_eq!(Role::from_name("Admin"), None);
    assert_eq!(Role::from_name("superuser"), None);

    for role in [Role::User, Role::Admin] {
        assert_eq!(Role::from_name(role.name()), Some(role));
    }
}

#[test]
fn names_permissions() {
    assert_eq!(Permission::ManageServers.name(), "manageServers");
    assert_eq!(Permission::GetUsers.name(), "getUsers");
}

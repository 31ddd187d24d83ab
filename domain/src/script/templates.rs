//! Fixed PowerShell statement templates.

/// Loads the IIS cmdlets; emitted once ahead of any web-config statement.
pub const IMPORT_WEB_ADMINISTRATION: &str = "Import-Module WebAdministration\n";

pub const SET_ITEM_PROPERTY: &str = "Set-ItemProperty";
pub const SET_WEB_CONFIGURATION_PROPERTY: &str = "Set-WebConfigurationProperty";

/// Registry write, one line.
pub fn set_item_property(path: &str, name: &str, value: &str) -> String {
    format!(
        "{} -Path \"{}\" -Name \"{}\" -Value {}\n",
        SET_ITEM_PROPERTY, path, name, value
    )
}

/// Registry read of every value under `path`.
pub fn get_item_property(path: &str) -> String {
    format!("Get-ItemProperty -Path \"{}\"", path)
}

/// Web-config write, one line.
pub fn set_web_configuration_property(filter: &str, path: &str, name: &str, value: &str) -> String {
    format!(
        "{} -Filter \"{}\" -PSPath \"{}\" -Name \"{}\" -Value {}\n",
        SET_WEB_CONFIGURATION_PROPERTY, filter, path, name, value
    )
}

/// Web-config read of a whole configuration section.
pub fn get_web_configuration(path: &str, filter: &str) -> String {
    format!("Get-WebConfiguration -pspath \"{}\" -filter \"{}\"", path, filter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_item_property() {
        assert_eq!(
            set_item_property(r"HKLM:\Key", "UriEnableCache", "1"),
            "Set-ItemProperty -Path \"HKLM:\\Key\" -Name \"UriEnableCache\" -Value 1\n"
        );
    }

    #[test]
    fn test_set_web_configuration_property() {
        assert_eq!(
            set_web_configuration_property("system.webServer/caching", "P", "enabled", "False"),
            "Set-WebConfigurationProperty -Filter \"system.webServer/caching\" -PSPath \"P\" -Name \"enabled\" -Value False\n"
        );
    }

    #[test]
    fn test_read_statements() {
        assert_eq!(get_item_property("K"), "Get-ItemProperty -Path \"K\"");
        assert_eq!(
            get_web_configuration("P", "F"),
            "Get-WebConfiguration -pspath \"P\" -filter \"F\""
        );
    }
}

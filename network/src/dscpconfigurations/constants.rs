use azrm_sdk::open_enum;

open_enum! {
    /// Transport protocol a QoS rule applies to.
    pub enum ProtocolType {
        Ah = "Ah",
        All = "All",
        DoNotUse = "DoNotUse",
        Esp = "Esp",
        Gre = "Gre",
        Icmp = "Icmp",
        Tcp = "Tcp",
        Udp = "Udp",
    }
}

open_enum! {
    pub enum ProvisioningState {
        Deleting = "Deleting",
        Failed = "Failed",
        Succeeded = "Succeeded",
        Updating = "Updating",
    }
}

impl ProvisioningState {
    /// true once the service stopped working on the resource
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Failed | Self::Succeeded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_parse() {
        assert_eq!(ProtocolType::parse("tcp"), ProtocolType::Tcp);
        assert_eq!(ProtocolType::parse("SCTP").as_str(), "SCTP");
        assert_eq!(ProtocolType::possible_values().len(), 8);
    }

    #[test]
    fn test_provisioning_state_terminal() {
        assert!(ProvisioningState::Succeeded.is_terminal());
        assert!(!ProvisioningState::Updating.is_terminal());
        assert!(!ProvisioningState::parse("Creating").is_terminal());
    }
}

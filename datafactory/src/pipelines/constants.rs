use azrm_sdk::open_enum;
use std::str::FromStr;

open_enum! {
    /// Status reported for an activity whose state is `Inactive`.
    pub enum ActivityOnInactiveMarkAs {
        Failed = "Failed",
        Skipped = "Skipped",
        Succeeded = "Succeeded",
    }
}

open_enum! {
    pub enum ActivityState {
        Active = "Active",
        Inactive = "Inactive",
    }
}

open_enum! {
    pub enum DatasetReferenceType {
        DatasetReference = "DatasetReference",
    }
}

open_enum! {
    /// Outcome of an upstream activity that lets a dependent activity run.
    pub enum DependencyCondition {
        Completed = "Completed",
        Failed = "Failed",
        Skipped = "Skipped",
        Succeeded = "Succeeded",
    }
}

open_enum! {
    pub enum ExpressionType {
        Expression = "Expression",
    }
}

open_enum! {
    pub enum IntegrationRuntimeReferenceType {
        IntegrationRuntimeReference = "IntegrationRuntimeReference",
    }
}

open_enum! {
    pub enum ParameterType {
        Array = "Array",
        Bool = "Bool",
        Float = "Float",
        Int = "Int",
        Object = "Object",
        SecureString = "SecureString",
        String = "String",
    }
}

open_enum! {
    pub enum PipelineReferenceType {
        PipelineReference = "PipelineReference",
    }
}

open_enum! {
    pub enum SqlWriteBehaviorEnum {
        Insert = "Insert",
        StoredProcedure = "StoredProcedure",
        Upsert = "Upsert",
    }
}

open_enum! {
    pub enum CosmosDbWriteBehavior {
        Insert = "Insert",
        Upsert = "Upsert",
    }
}

open_enum! {
    pub enum VariableType {
        Array = "Array",
        Bool = "Bool",
        String = "String",
    }
}

open_enum! {
    pub enum WebActivityMethod {
        Delete = "DELETE",
        Get = "GET",
        Post = "POST",
        Put = "PUT",
    }
}

open_enum! {
    pub enum SqlPartitionOption {
        DynamicRange = "DynamicRange",
        None = "None",
        PhysicalPartitionsOfTable = "PhysicalPartitionsOfTable",
    }
}

open_enum! {
    pub enum HttpCompressionType {
        Gzip = "gzip",
        None = "none",
    }
}

/// Reads a literal enum value out of a field that may also hold an expression object.
pub(crate) fn literal_of<E: FromStr>(value: Option<&serde_json::Value>) -> Option<E> {
    value.and_then(|v| v.as_str()).and_then(|s| s.parse().ok())
}
